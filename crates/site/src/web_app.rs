use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use desktop_runtime::{parse_open_keys, DesktopProvider, DesktopShell};
use platform_host_web::{observe_reveal, RevealObserver, REVEAL_THRESHOLD};
use site_content::{contact_form, section_anchor, NAV_ITEMS, PROFILE, PROJECTS, SKILL_CATEGORIES, STATS};

use crate::{
    contact::{ContactForm, SubmitStatus, SUBMIT_DELAY},
    cursor::CustomCursor,
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PROFILE.name />
        <Meta name="description" content=PROFILE.description />

        <CustomCursor />
        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <NavBar />
        <HeroSection />
        <WorkSection />
        <SkillsSection />
        <AboutSection />
        <DesktopEntry />
        <ContactSection />
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="site-nav">
            <span class="site-nav-brand">{PROFILE.name}</span>
            <ul>
                {NAV_ITEMS
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <a href=format!("#{}", section_anchor(label))>{*label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id=section_anchor("Home") class="site-section hero">
            <Show when=|| PROFILE.available fallback=|| ()>
                <span class="hero-badge">{PROFILE.badge}</span>
            </Show>
            <h1>{PROFILE.name}</h1>
            <p class="hero-description">{PROFILE.description}</p>
            <a class="hero-cta" href=format!("#{}", section_anchor("Contact"))>"Get in touch"</a>
        </section>
    }
}

#[component]
fn WorkSection() -> impl IntoView {
    view! {
        <section id=section_anchor("Work") class="site-section work">
            <h2>"Selected Work"</h2>
            <ol class="work-list">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <li class="work-item">
                                <span class="work-number">{project.number}</span>
                                <div>
                                    <h3>{project.title}</h3>
                                    <p>{project.category}</p>
                                </div>
                                <span class="work-year">{project.year}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id=section_anchor("Skills") class="site-section skills">
            <h2>"Skills"</h2>
            <div class="skills-grid">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <article class="skill-card">
                                <h3>{category.title}</h3>
                                <p>{category.description}</p>
                                <p class="skill-tech">{category.technologies.join(" · ")}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id=section_anchor("About") class="site-section about">
            <h2>"About"</h2>
            {PROFILE
                .paragraphs
                .iter()
                .map(|paragraph| view! { <p>{*paragraph}</p> })
                .collect_view()}
            <dl class="about-stats">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div>
                                <dt>{stat.value}</dt>
                                <dd>{stat.label}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

#[component]
/// Embedded retro desktop; boots once revealed and `?open=terminal,pong` opens apps after boot.
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let open_on_boot = query.with_untracked(|params| {
        params
            .get("open")
            .map(|value| parse_open_keys(value))
            .unwrap_or_default()
    });

    // The machine powers on the first time the section is scrolled into view.
    let revealed = create_rw_signal(false);
    let observer = store_value(None::<RevealObserver>);
    let section = create_node_ref::<html::Section>();
    section.on_load(move |element| {
        let registration = observe_reveal(&element, REVEAL_THRESHOLD, move || revealed.set(true));
        observer.set_value(registration);
    });
    on_cleanup(move || {
        let _ = observer.try_update_value(Option::take);
    });

    view! {
        <section id="desktop" class="site-section desktop-section" node_ref=section>
            <DesktopProvider open_on_boot revealed>
                <DesktopShell />
            </DesktopProvider>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let pending = store_value::<Option<TimeoutHandle>>(None);
    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(ContactForm::begin_submit).unwrap_or(false) {
            return;
        }
        match set_timeout_with_handle(move || form.update(ContactForm::finish_submit), SUBMIT_DELAY) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("contact form timer failed: {err:?}");
                form.update(ContactForm::finish_submit);
            }
        }
    };
    let submitting = move || form.with(|f| f.status == SubmitStatus::Submitting);

    view! {
        <section id=section_anchor("Contact") class="site-section contact">
            <h2>"Contact"</h2>
            <p>
                <a href=PROFILE.mailto()>{PROFILE.email}</a>
                " · "
                {PROFILE.location}
            </p>
            <form class="contact-form" on:submit=submit>
                <input
                    type="text"
                    required=true
                    placeholder=contact_form::NAME_PLACEHOLDER
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.name = event_target_value(&ev);
                            f.edited();
                        })
                    }
                />
                <input
                    type="email"
                    required=true
                    placeholder=contact_form::EMAIL_PLACEHOLDER
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.email = event_target_value(&ev);
                            f.edited();
                        })
                    }
                />
                <textarea
                    required=true
                    rows="5"
                    placeholder=contact_form::MESSAGE_PLACEHOLDER
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| {
                        form.update(|f| {
                            f.message = event_target_value(&ev);
                            f.edited();
                        })
                    }
                ></textarea>
                <button type="submit" disabled=move || !form.with(ContactForm::can_submit)>
                    {move || {
                        if submitting() { contact_form::SUBMITTING } else { contact_form::SUBMIT }
                    }}
                </button>
                <Show when=move || form.with(|f| f.status == SubmitStatus::Sent) fallback=|| ()>
                    <p class="contact-success" role="status">{contact_form::SUCCESS}</p>
                </Show>
            </form>
            <div class="contact-socials">
                <a href=PROFILE.github_url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                <a href=PROFILE.linkedin_url target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
            </div>
        </section>
    }
}
