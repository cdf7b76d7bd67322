//! Static text readers: the portfolio ReadMe and the About This Computer panel.

mod pages;

use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use pages::{
    largest_unused_kb, Megabytes, ReadmePage, MEMORY_USERS, SYSTEM_VERSION, TOTAL_MEMORY_KB,
};
use platform_host::ClipboardService;
use site_content::{PROFILE, PROJECTS, SKILL_CATEGORIES, STATS};
use system_ui::prelude::*;

const COPIED_FLAG_DURATION: Duration = Duration::from_secs(2);

/// Mounts the ReadMe reader into a desktop window.
pub fn mount_readme(context: AppMountContext) -> View {
    view! { <ReadmeApp context /> }.into_view()
}

/// Mounts the About This Computer panel into a desktop window.
pub fn mount_about(_context: AppMountContext) -> View {
    view! { <AboutApp /> }.into_view()
}

/// Writes `text` and reports whether the clipboard accepted it.
async fn copy_to_clipboard<C: ClipboardService + ?Sized>(clipboard: &C, text: &str) -> bool {
    match clipboard.write_text(text).await {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("clipboard write failed: {err}");
            false
        }
    }
}

#[component]
/// Portfolio reader with sidebar navigation.
pub fn ReadmeApp(context: AppMountContext) -> impl IntoView {
    let page = create_rw_signal(ReadmePage::default());
    let clipboard = context.services.clipboard.clone();
    let copied = create_rw_signal(false);
    let copied_reset = store_value::<Option<TimeoutHandle>>(None);

    let clear_reset = move || {
        copied_reset.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };
    on_cleanup(clear_reset);

    let copy_email = Callback::new(move |_: ev::MouseEvent| {
        let clipboard = clipboard.clone();
        spawn_local(async move {
            let ok = copy_to_clipboard(clipboard.as_ref(), PROFILE.email).await;
            clear_reset();
            copied.set(ok);
            if !ok {
                return;
            }
            match set_timeout_with_handle(move || copied.set(false), COPIED_FLAG_DURATION) {
                Ok(handle) => copied_reset.set_value(Some(handle)),
                Err(err) => {
                    logging::warn!("copied flag timer failed: {err:?}");
                    copied.set(false);
                }
            }
        });
    });

    view! {
        <div class="app-readme">
            <aside class="readme-sidebar">
                <h2 class="readme-name">"Giovanni" <br /> "Cruz"</h2>
                <p class="readme-edition">
                    {format!("Portfolio '{:02}", platform_host::current_year().rem_euclid(100))}
                </p>
                <nav class="readme-nav">
                    {ReadmePage::ALL
                        .into_iter()
                        .map(|target| {
                            let current = move || page.get() == target;
                            view! {
                                <button
                                    type="button"
                                    class="readme-nav-item"
                                    aria-current=move || current().then_some("page")
                                    data-current=move || current().to_string()
                                    on:click=move |_| page.set(target)
                                >
                                    <Show when=current>
                                        <span aria-hidden="true">"○"</span>
                                    </Show>
                                    <span>{target.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <main
                class="readme-body"
                on:wheel=|ev| ev.stop_propagation()
                on:touchmove=|ev| ev.stop_propagation()
            >
                {move || match page.get() {
                    ReadmePage::Home => view! { <HomePage /> }.into_view(),
                    ReadmePage::About => view! { <AboutPage /> }.into_view(),
                    ReadmePage::Skills => view! { <SkillsPage /> }.into_view(),
                    ReadmePage::Projects => view! { <ProjectsPage /> }.into_view(),
                    ReadmePage::Contact => view! { <ContactPage copied copy_email /> }.into_view(),
                }}
                <footer class="readme-footer">
                    {format!("© {} {}", platform_host::current_year(), PROFILE.name)}
                </footer>
            </main>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="readme-page" data-page="home">
            <h1>"Welcome"</h1>
            <p class="readme-lede">{format!("I'm {}", PROFILE.name)}</p>
            <p>{PROFILE.description}</p>
            {PROFILE.paragraphs.first().map(|paragraph| view! { <p>{*paragraph}</p> })}
            <p class="readme-mobile-tip">
                "Tip: Visit on a computer for the full retro Mac experience!"
            </p>
        </section>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <section class="readme-page" data-page="about">
            <h1>"About Me"</h1>
            {PROFILE
                .paragraphs
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
            <h2>"Quick Facts"</h2>
            <ul class="readme-stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <li>
                                <strong>{stat.value}</strong>
                                " "
                                <span>{stat.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn SkillsPage() -> impl IntoView {
    view! {
        <section class="readme-page" data-page="skills">
            <h1>"Skills"</h1>
            {SKILL_CATEGORIES
                .iter()
                .map(|category| {
                    view! {
                        <div class="readme-skill-group">
                            <h2>{category.title}</h2>
                            <p>{category.description}</p>
                            <div class="readme-tags">
                                {category
                                    .technologies
                                    .iter()
                                    .map(|tech| view! { <span class="readme-tag">{*tech}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="readme-page" data-page="projects">
            <h1>"Projects"</h1>
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <article class="readme-project">
                            <header>
                                <h2>{project.title}</h2>
                                <span class="readme-project-year">{project.year}</span>
                            </header>
                            <p>{project.category}</p>
                            <p class="readme-project-tech">{project.tech}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn ContactPage(copied: RwSignal<bool>, copy_email: Callback<ev::MouseEvent>) -> impl IntoView {
    view! {
        <section class="readme-page" data-page="contact">
            <h1>"Contact"</h1>
            <p>
                "Feel free to reach out! I'm always open to discussing new projects, creative ideas, or opportunities."
            </p>
            <div class="readme-contact-row">
                <a href=PROFILE.mailto()>
                    <span class="readme-contact-label">"Email"</span>
                    <span class="readme-contact-value">{PROFILE.email}</span>
                </a>
                <Button
                    variant=ButtonVariant::Quiet
                    aria_label=Signal::derive(move || {
                        if copied.get() { "Copied" } else { "Copy email" }.to_string()
                    })
                    pressed=Signal::derive(move || copied.get())
                    on_click=copy_email
                >
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </Button>
            </div>
            <div class="readme-contact-row">
                <span class="readme-contact-label">"Location"</span>
                <span class="readme-contact-value">{PROFILE.location}</span>
            </div>
            <h2>"Find me on"</h2>
            <div class="readme-socials">
                <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
            </div>
        </section>
    }
}

#[component]
/// About This Computer panel with the simulated memory map.
pub fn AboutApp() -> impl IntoView {
    view! {
        <div class="app-about">
            <div class="about-logo">{SYSTEM_VERSION.trim_end_matches(".0")}</div>
            <table class="about-info">
                <tbody>
                    <tr>
                        <th>"Version:"</th>
                        <td>{SYSTEM_VERSION}</td>
                    </tr>
                    <tr>
                        <th>"Built-in Memory:"</th>
                        <td>{Megabytes(TOTAL_MEMORY_KB).to_string()}</td>
                    </tr>
                    <tr>
                        <th>"Virtual Memory:"</th>
                        <td>"Off"</td>
                    </tr>
                    <tr>
                        <th>"Largest Unused Block:"</th>
                        <td>{Megabytes(largest_unused_kb()).to_string()}</td>
                    </tr>
                    <tr>
                        <td colspan="2">{format!("™ & © {}, {}", PROFILE.name, platform_host::current_year())}</td>
                    </tr>
                </tbody>
            </table>
            <div class="about-memory" role="table" aria-label="Memory usage">
                {MEMORY_USERS
                    .iter()
                    .map(|user| {
                        view! {
                            <div class="about-memory-row" role="row">
                                <span role="cell">{user.label}</span>
                                <span role="cell">{Megabytes(user.used_kb).to_string()}</span>
                                <ProgressBar layout_class="about-memory-bar" percent=user.percent_of_total() />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryClipboardService, NoopClipboardService};

    use super::*;

    #[test]
    fn copy_reports_clipboard_outcome() {
        let clipboard = MemoryClipboardService::default();
        assert!(block_on(copy_to_clipboard(&clipboard, PROFILE.email)));
        assert_eq!(clipboard.contents().as_deref(), Some("giovanni@crz.dev"));

        assert!(!block_on(copy_to_clipboard(&NoopClipboardService, PROFILE.email)));
    }
}
