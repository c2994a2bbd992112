//! Car, service and city selectors with the search button.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::{
    catalog::CatalogItem,
    filter_state::{FilterKey, FilterState},
    form_field::{FieldConfig, FieldValue, SelectOption},
};
use crate::{
    api::catalog_api::{list_brand_models, list_brands, list_cities, list_services},
    components::form_field::FormField,
    data_definitions::search_page_state::SearchPageState,
};

type CatalogResult = Option<Result<Vec<CatalogItem>, ServerFnError>>;

#[component]
pub fn SearchFilterBar() -> Element {
    let search_page_state = use_context::<SearchPageState>();
    let filters = use_signal(FilterState::default);

    let brands = use_resource(|| list_brands());
    let services = use_resource(|| list_services());
    let cities = use_resource(|| list_cities());
    // models depend on the brand, so this resource reruns when the brand changes
    let brand_models = use_resource(move || {
        let brand = filters.read().car_brand.clone();
        async move {
            match brand {
                Some(brand) => list_brand_models(brand).await,
                None => Ok(Vec::new()),
            }
        }
    });
    let no_brand = use_memo(move || filters.read().car_brand.is_none());
    let brands: ReadSignal<CatalogResult> = brands.into();
    let brand_models: ReadSignal<CatalogResult> = brand_models.into();
    let services: ReadSignal<CatalogResult> = services.into();
    let cities: ReadSignal<CatalogResult> = cities.into();

    let trigger_search = move |_| {
        search_page_state.submit.call(filters.read().clone());
    };

    rsx! {
        div {
            id: "x-search-filter-bar",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: flex-end;
                gap: 16px;
            ",
            CatalogSelect { filter_key: FilterKey::CarBrand, label: "Car brand", catalog: brands, filters }
            CatalogSelect { filter_key: FilterKey::CarModel, label: "Model", catalog: brand_models, filters, disabled: no_brand() }
            CatalogSelect { filter_key: FilterKey::Service, label: "Service", catalog: services, filters }
            CatalogSelect { filter_key: FilterKey::City, label: "City", catalog: cities, filters }

            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    height: 40px;
                    padding: 0 22px;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    color: white;
                    font-size: 16px;
                    font-weight: 500;
                    cursor: pointer;
                ",
                onclick: trigger_search,
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Search"
            }
        }
    }
}

#[component]
fn CatalogSelect(
    filter_key: FilterKey,
    label: String,
    catalog: ReadSignal<CatalogResult>,
    filters: Signal<FilterState>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut filters = filters;
    let catalog: CatalogResult = catalog.read().clone();
    let (options, error_txt) = match &catalog {
        Some(Ok(items)) => (SelectOption::from_catalog(items), None),
        Some(Err(e)) => (Vec::new(), Some(format!("Could not load {}: {}", label.to_lowercase(), e))),
        None => (Vec::new(), None),
    };
    let config = FieldConfig::select(filter_key.as_str(), label.clone(), options)
        .placeholder(format!("Any {}", label.to_lowercase()))
        .disabled(disabled || catalog.is_none());
    let value = FieldValue::Single(filters.read().get(filter_key).map(str::to_string));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px;",
            FormField {
                config,
                value,
                onchange: move |value: FieldValue| {
                    filters.write().set(filter_key, value.single());
                },
            }
            if let Some(error_txt) = error_txt {
                span { class: "x-field-error", "{error_txt}" }
            }
        }
    }
}
