use super::*;

#[component]
pub(super) fn BootScreen(stage: Memo<BootStage>) -> impl IntoView {
    view! {
        <div class="boot-screen" data-stage=move || format!("{:?}", stage.get()).to_lowercase()>
            {move || match stage.get() {
                BootStage::Loading => {
                    view! {
                        <div class="boot-loading">
                            <div class="boot-logo">"Cruz OS 9"</div>
                            <p>"Starting up..."</p>
                            <div class="boot-progress" aria-hidden="true">
                                <div class="boot-progress-fill"></div>
                            </div>
                        </div>
                    }
                        .into_view()
                }
                _ => view! { <div class="boot-happy" aria-label="Happy computer"></div> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub(super) fn ShutdownScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="shutdown-screen">
            <div class="shutdown-machine" aria-hidden="true"></div>
            <p>"Computer is off"</p>
            <Button on_click=Callback::new(move |_: ev::MouseEvent| runtime.dispatch_action(DesktopAction::PowerOn))>
                "Restart"
            </Button>
        </div>
    }
}
