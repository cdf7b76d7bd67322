//! Trash can window with a persisted item list.

mod listing;

use std::rc::Rc;
use std::time::Duration;

use desktop_app_contract::AppMountContext;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use listing::TrashBin;
pub use listing::{default_items, load_items, save_items, TrashItem, TRASH_STORAGE_KEY};
use platform_host::KeyValueStore;
use system_ui::prelude::*;

const EMPTY_STEP_INTERVAL: Duration = Duration::from_millis(200);

/// Mounts the trash can into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <TrashApp context /> }.into_view()
}

fn persist(storage: Rc<dyn KeyValueStore>, items: Vec<TrashItem>) {
    spawn_local(async move {
        if let Err(err) = save_items(storage.as_ref(), &items).await {
            logging::warn!("trash save failed: {err}");
        }
    });
}

#[component]
/// Trash window body.
pub fn TrashApp(context: AppMountContext) -> impl IntoView {
    let bin = create_rw_signal(TrashBin::default());
    let storage = context.services.storage.clone();
    let emptier = store_value::<Option<IntervalHandle>>(None);

    let load_from = storage.clone();
    spawn_local(async move {
        let items = load_items(load_from.as_ref()).await;
        bin.update(|bin| bin.finish_load(items));
    });

    create_effect(move |_| {
        let snapshot = bin.with(|bin| bin.is_loaded().then(|| bin.items().to_vec()));
        if let Some(items) = snapshot {
            persist(storage.clone(), items);
        }
    });

    let stop_emptier = move || {
        emptier.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    let start_emptying = move |_: ev::MouseEvent| {
        if !bin.try_update(TrashBin::begin_emptying).unwrap_or(false) {
            return;
        }
        stop_emptier();
        let step = move || {
            let more = bin.try_update(TrashBin::step_emptying).unwrap_or(false);
            if !more {
                stop_emptier();
            }
        };
        match set_interval_with_handle(step, EMPTY_STEP_INTERVAL) {
            Ok(handle) => emptier.set_value(Some(handle)),
            Err(err) => logging::warn!("trash emptying failed to start: {err:?}"),
        }
    };

    on_cleanup(stop_emptier);

    view! {
        <div class="app-trash">
            <div class="trash-toolbar">
                <span class="trash-summary">{move || bin.with(TrashBin::summary)}</span>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=Signal::derive(move || !bin.with(TrashBin::can_empty))
                    on_click=Callback::new(start_emptying)
                >
                    {move || if bin.with(TrashBin::is_emptying) { "Emptying..." } else { "Empty Trash" }}
                </Button>
            </div>
            <div class="trash-columns" aria-hidden="true">
                <span>"Name"</span>
                <span>"Size"</span>
                <span>"Date Deleted"</span>
            </div>
            <div class="trash-list" role="list">
                <Show
                    when=move || bin.with(|bin| !bin.items().is_empty())
                    fallback=|| view! { <p class="trash-empty">"No items in Trash"</p> }
                >
                    {move || {
                        bin.with(|bin| {
                            bin.items()
                                .iter()
                                .map(|item| {
                                    let glyph = if item.is_folder() { "📁" } else { "📄" };
                                    view! {
                                        <div class="trash-row" role="listitem">
                                            <span class="trash-name">
                                                <span aria-hidden="true">{glyph}</span>
                                                {item.name.clone()}
                                            </span>
                                            <span class="trash-size">{item.size.clone()}</span>
                                            <span class="trash-date">{item.date.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </Show>
            </div>
            <StatusBar>{move || bin.with(TrashBin::footer)}</StatusBar>
        </div>
    }
}
