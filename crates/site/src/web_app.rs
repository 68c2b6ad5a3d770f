use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;
use storefront_runtime::{
    config::NavEntry, CatalogAction, NavSelection, StorefrontConfig, StorefrontProvider,
    StorefrontShell,
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Toko Buku Online" />
        <Meta name="description" content="Katalog buku pilihan dengan harga terbaik." />
        <Meta name="theme-color" content="#667eea" />

        <Router>
            <Routes>
                <Route path="" view=StorefrontEntry />
            </Routes>
        </Router>
    }
}

/// Maps a `?category=` query value onto the initial navigation action.
/// Only keys with a navigation control are honored.
fn initial_nav_action(category: Option<&str>, nav: &[NavEntry]) -> Option<CatalogAction> {
    let key = category.map(str::trim)?;
    nav.iter()
        .any(|entry| entry.key == key)
        .then(|| CatalogAction::SelectNav(NavSelection::parse(key)))
}

#[component]
pub fn StorefrontEntry() -> impl IntoView {
    let query = use_query_map();
    let nav = &StorefrontConfig::builtin().nav;
    let initial_action = query.with_untracked(|map| {
        initial_nav_action(map.get("category").map(String::as_str), nav)
    });

    view! {
        <StorefrontProvider host_services=build_host_services() initial_action=initial_action>
            <StorefrontShell title="📚 Toko Buku Online" tagline="Temukan buku favorit Anda" />
        </StorefrontProvider>
    }
}

#[cfg(test)]
mod tests {
    use storefront_runtime::CategoryKey;

    use super::*;

    #[test]
    fn category_query_selects_initial_nav() {
        let nav = &StorefrontConfig::builtin().nav;
        assert_eq!(
            initial_nav_action(Some("fiksi"), nav),
            Some(CatalogAction::SelectNav(NavSelection::Catalog(
                CategoryKey::Named("fiksi".to_string())
            )))
        );
        assert_eq!(
            initial_nav_action(Some("contact"), nav),
            Some(CatalogAction::SelectNav(NavSelection::Contact))
        );
        assert_eq!(initial_nav_action(Some("  "), nav), None);
        assert_eq!(initial_nav_action(None, nav), None);
    }

    #[test]
    fn category_query_without_nav_control_is_ignored() {
        let nav = &StorefrontConfig::builtin().nav;
        assert_eq!(initial_nav_action(Some("komik"), nav), None);
        assert_eq!(initial_nav_action(Some("Fiksi"), nav), None);
    }
}
