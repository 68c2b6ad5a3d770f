//! Runtime provider and context wiring for the storefront.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host bootstrap
//! wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::StorefrontHostContext,
    model::StorefrontState,
    reducer::{reduce_storefront, CatalogAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading storefront state and dispatching [`CatalogAction`] values.
pub struct StorefrontRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<StorefrontHostContext>,
    /// Reactive storefront state signal.
    pub state: RwSignal<StorefrontState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<CatalogAction>,
}

impl StorefrontRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: CatalogAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`StorefrontRuntimeContext`] to descendant components and starts the catalog load.
pub fn StorefrontProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Initial navigation selection, for example from a `?category=` deep link.
    #[prop(default = None)]
    initial_action: Option<CatalogAction>,
    children: Children,
) -> impl IntoView {
    let host = store_value(StorefrontHostContext::new(host_services));
    let state = create_rw_signal(StorefrontState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: CatalogAction| {
        let mut storefront = state.get_untracked();
        let previous = storefront.clone();

        match reduce_storefront(&mut storefront, action) {
            Ok(new_effects) => {
                if storefront != previous {
                    state.set(storefront);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("storefront reducer error: {err}"),
        }
    });

    let runtime = StorefrontRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    if let Some(action) = initial_action {
        runtime.dispatch_action(action);
    }
    effect_executor::install(runtime);
    runtime.host.get_value().install_boot(runtime.dispatch);

    children().into_view()
}

/// Returns the current [`StorefrontRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront_runtime() -> StorefrontRuntimeContext {
    use_context::<StorefrontRuntimeContext>().expect("StorefrontRuntimeContext not provided")
}
