use std::time::Duration;

use super::*;
use crate::{config::NavEntry, host::SEARCH_INPUT_ID, model::NavSelection};

#[component]
pub(super) fn CategoryNav(runtime: StorefrontRuntimeContext, nav: Vec<NavEntry>) -> impl IntoView {
    let active_key = create_memo(move |_| {
        runtime
            .state
            .with(|state| state.active_nav_key().map(str::to_string))
    });

    view! {
        <Cluster gap=LayoutGap::Sm role="tablist" aria_label="Kategori buku" ui_slot="category-nav">
            {nav
                .into_iter()
                .map(|entry| {
                    let selection = NavSelection::parse(&entry.key);
                    let key = entry.key;
                    let selected = Signal::derive(move || {
                        active_key.with(|active| active.as_deref() == Some(key.as_str()))
                    });
                    view! {
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            ui_slot="nav-button"
                            selected=selected
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(CatalogAction::SelectNav(selection.clone()))
                            })
                        >
                            {entry.label}
                        </Button>
                    }
                })
                .collect_view()}
        </Cluster>
    }
}

#[component]
pub(super) fn SearchBar(runtime: StorefrontRuntimeContext, debounce: Duration) -> impl IntoView {
    let query = create_memo(move |_| runtime.state.with(|state| state.query.clone()));
    let nav_epoch = create_memo(move |_| runtime.state.with(|state| state.nav_epoch));
    let draft = create_rw_signal(String::new());
    let generation = store_value(0_u64);

    create_effect(move |_| draft.set(query.get()));
    // A nav change cancels the pending debounce and drops the unsent draft.
    create_effect(move |previous: Option<u64>| {
        let epoch = nav_epoch.get();
        if previous.is_some_and(|previous| previous != epoch) {
            generation.update_value(|current| *current += 1);
            draft.set(String::new());
        }
        epoch
    });

    let on_input = Callback::new(move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.set(value.clone());
        generation.update_value(|current| *current += 1);
        let scheduled = generation.get_value();
        let typed_at = nav_epoch.get_untracked();
        set_timeout(
            move || {
                if generation.try_get_value() == Some(scheduled) {
                    runtime.dispatch_action(CatalogAction::Search {
                        query: value,
                        nav_epoch: typed_at,
                    });
                }
            },
            debounce,
        );
    });

    view! {
        <TextField
            id=SEARCH_INPUT_ID
            input_type="search"
            placeholder="🔍 Cari judul, penulis, atau deskripsi..."
            aria_label="Cari buku"
            ui_slot="search"
            value=draft
            on_input=on_input
        />
    }
}
