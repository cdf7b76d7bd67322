//! Toy terminal with a fixed command set.
//!
//! Commands are interpreted locally; nothing is executed on the host.

mod commands;

use commands::{TerminalOutput, TerminalSession, TranscriptEntry, PROMPT_USER};
use desktop_app_contract::AppMountContext;
use leptos::ev::KeyboardEvent;
use leptos::*;
use site_content::PROFILE;

/// Mounts the terminal into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <TerminalApp context /> }.into_view()
}

#[component]
fn Prompt(command: String) -> impl IntoView {
    view! {
        <div class="terminal-prompt">
            <span class="terminal-user">{PROMPT_USER}</span>
            <span class="terminal-sep">":"</span>
            <span class="terminal-cwd">"~"</span>
            <span class="terminal-sep">"$ "</span>
            <span class="terminal-command">{command}</span>
        </div>
    }
}

fn render_output(output: TerminalOutput) -> View {
    match output {
        TerminalOutput::Text(text) if text.is_empty() => ().into_view(),
        TerminalOutput::Text(text) => view! { <pre class="terminal-output">{text}</pre> }.into_view(),
        TerminalOutput::Contact => view! {
            <div class="terminal-output terminal-contact">
                <p>
                    "Email: "
                    <a href=PROFILE.mailto() on:click=|ev| ev.stop_propagation()>{PROFILE.email}</a>
                </p>
                <p>{format!("Location: {}", PROFILE.location)}</p>
                <p>
                    "GitHub: "
                    <a
                        href=PROFILE.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {PROFILE.github_url}
                    </a>
                </p>
                <p>
                    "LinkedIn: "
                    <a
                        href=PROFILE.linkedin_url
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=|ev| ev.stop_propagation()
                    >
                        {PROFILE.linkedin_url}
                    </a>
                </p>
            </div>
        }
        .into_view(),
    }
}

#[component]
/// Terminal window body.
pub fn TerminalApp(context: AppMountContext) -> impl IntoView {
    let session = store_value(TerminalSession::default());
    let transcript = create_rw_signal(Vec::<TranscriptEntry>::new());
    let input = create_rw_signal(String::new());
    let scroll_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    // Keep the newest output in view.
    create_effect(move |_| {
        transcript.with(|_| ());
        if let Some(scroller) = scroll_ref.get() {
            scroller.set_scroll_top(scroller.scroll_height());
        }
    });

    let visible = context.visible;
    create_effect(move |_| {
        if !visible.get() {
            return;
        }
        if let Some(field) = input_ref.get() {
            let _ = field.focus();
        }
    });

    let submit = move || {
        let line = input.get_untracked();
        session.update_value(|session| {
            session.submit(&line, platform_host::local_date_string);
            transcript.set(session.entries().to_vec());
        });
        input.set(String::new());
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "ArrowUp" => {
            ev.prevent_default();
            let recalled = session
                .try_update_value(|session| session.history_prev().map(str::to_string))
                .flatten();
            if let Some(line) = recalled {
                input.set(line);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            let recalled = session
                .try_update_value(|session| session.history_next().map(str::to_string))
                .flatten();
            if let Some(line) = recalled {
                input.set(line);
            }
        }
        _ => {}
    };

    view! {
        <div
            class="app-terminal"
            node_ref=scroll_ref
            on:click=move |_| {
                if let Some(field) = input_ref.get_untracked() {
                    let _ = field.focus();
                }
            }
        >
            <div class="terminal-banner">
                <p>"Cruz OS Terminal v1.0"</p>
                <p>"Type 'help' for available commands."</p>
                <p>"---"</p>
            </div>
            <For each=move || transcript.get() key=|entry| entry.id let:entry>
                <div class="terminal-entry">
                    <Prompt command=entry.command.clone() />
                    {render_output(entry.output.clone())}
                </div>
            </For>
            <div class="terminal-input-line">
                <Prompt command=String::new() />
                <input
                    type="text"
                    class="terminal-input"
                    node_ref=input_ref
                    spellcheck="false"
                    autocomplete="off"
                    aria-label="Terminal input"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}
