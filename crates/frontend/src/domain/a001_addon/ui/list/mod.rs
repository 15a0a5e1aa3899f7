pub mod state;

use self::state::{create_state, AddOnListState};
use crate::domain::a001_addon::api;
use crate::domain::a002_addon_category::api as category_api;
use crate::shared::list_utils::{
    contains_ignore_case, filter_list, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_addon::aggregate::{AddOn, AddOnDto, AddOnId};
use contracts::domain::a002_addon_category::aggregate::AddOnCategoryId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for AddOn {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => self.price.total_cmp(&other.price),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for AddOn {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

/// Rows to show for the current filter, search and sort settings
pub fn visible_rows(state: &AddOnListState) -> Vec<AddOn> {
    let mut rows: Vec<AddOn> = filter_list(&state.addons, &state.search)
        .into_iter()
        .filter(|a| state.category_filter.map_or(true, |c| a.category_id == c))
        .collect();
    if state.sort_field == "category" {
        // The column shows names, which the rows themselves do not carry
        let name = |a: &AddOn| state.category_name(a.category_id).to_lowercase();
        rows.sort_by(|a, b| {
            let cmp = name(a).cmp(&name(b));
            if state.sort_ascending { cmp } else { cmp.reverse() }
        });
    } else {
        sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    }
    rows
}

/// Parse the price field of the add-on form
pub fn parse_price(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid price", raw.trim()))
}

#[component]
#[allow(non_snake_case)]
pub fn AddOnList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Form fields (shared by create and edit)
    let form_name = RwSignal::new(String::new());
    let form_price = RwSignal::new("0".to_string());
    let form_category = RwSignal::new(String::new());
    let filter_category = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let (categories, addons) = (category_api::fetch_all().await, api::fetch_all().await);
            match (categories, addons) {
                (Ok(categories), Ok(addons)) => {
                    state.update(|s| {
                        s.categories = categories;
                        s.addons = addons;
                        s.is_loaded = true;
                    });
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("add-on catalog load failed: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    // Category filter and search feed the list state
    Effect::new(move |_| {
        let filter = AddOnCategoryId::from_string(&filter_category.get()).ok();
        let text = search.get();
        state.update(|s| {
            s.category_filter = filter;
            s.search = text;
        });
    });

    let reset_form = move || {
        form_name.set(String::new());
        form_price.set("0".to_string());
        state.update(|s| s.editing = None);
    };

    let read_form = move || -> Result<AddOnDto, String> {
        let category_id = AddOnCategoryId::from_string(&form_category.get_untracked())
            .map_err(|_| "Select a category".to_string())?;
        let price = parse_price(&form_price.get_untracked())?;
        let dto = AddOnDto::new(form_name.get_untracked(), category_id, price);
        dto.validate()?;
        Ok(dto)
    };

    let save = move || {
        let dto = match read_form() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let editing = state.with_untracked(|s| s.editing);
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update(id, &dto).await.map(|mut saved| {
                    // Some API versions echo only the id; keep the edited values
                    saved.apply(&dto);
                    saved
                }),
                None => api::create(&dto).await,
            };
            match result {
                Ok(saved) => {
                    log::info!("add-on {} saved", saved.id);
                    state.update(|s| s.upsert(saved));
                    set_error.set(None);
                    reset_form();
                }
                Err(e) => set_error.set(Some(format!("Failed to save add-on: {}", e))),
            }
        });
    };

    let start_edit = move |addon: AddOn| {
        form_name.set(addon.name.clone());
        form_price.set(addon.price.to_string());
        form_category.set(addon.category_id.as_string());
        state.update(|s| s.editing = Some(addon.id));
    };

    let remove = move |id: AddOnId| {
        spawn_local(async move {
            match api::delete_by_id(id).await {
                Ok(()) => {
                    log::info!("add-on {} deleted", id);
                    state.update(|s| s.remove(id));
                }
                Err(e) => set_error.set(Some(format!("Failed to delete add-on: {}", e))),
            }
        });
    };

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
    };

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell>
                <span class="table__sortable-header" on:click=move |_| toggle_sort(field)>
                    {label}
                    {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="a001_addon--list" category=PAGE_CAT_LIST title="Manage Add-ons">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <Space>
                    <Select value=filter_category>
                        <option value="">"All categories"</option>
                        {move || state.with(|s| s.categories.clone()).into_iter().map(|c| view! {
                            <option value=c.id.as_string()>{c.name}</option>
                        }).collect_view()}
                    </Select>
                    <Input value=search placeholder="Search add-ons..." />
                </Space>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|err| view! {
                <div class="error-message">{err}</div>
            })}

            <div class="form">
                <h3>{move || if state.with(|s| s.editing.is_some()) { "Edit Add-on" } else { "Add Add-on" }}</h3>
                <Flex gap=FlexGap::Small style="align-items: center;">
                    <Select value=form_category>
                        <option value="">"-- Category --"</option>
                        {move || state.with(|s| s.categories.clone()).into_iter().map(|c| view! {
                            <option value=c.id.as_string()>{c.name}</option>
                        }).collect_view()}
                    </Select>
                    <Input value=form_name placeholder="Add-on name" />
                    <Input value=form_price input_type=InputType::Number placeholder="Price" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                        {move || if state.with(|s| s.editing.is_some()) { "Save Changes" } else { "Add" }}
                    </Button>
                    <Show when=move || state.with(|s| s.editing.is_some())>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| reset_form()>
                            "Cancel"
                        </Button>
                    </Show>
                </Flex>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading-spinner">"Loading add-ons..."</p> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("name", "Name")}
                            {header("category", "Category")}
                            {header("price", "Price")}
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = state.with(visible_rows);
                            rows.into_iter().map(|addon| {
                                let category = state.with_untracked(|s| s.category_name(addon.category_id));
                                let id = addon.id;
                                let for_edit = addon.clone();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{addon.name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{category}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_money(addon.price)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Space>
                                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| start_edit(for_edit.clone())>
                                                    "Edit"
                                                </Button>
                                                <Button appearance=ButtonAppearance::Subtle on_click=move |_| remove(id)>
                                                    "Delete"
                                                </Button>
                                            </Space>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_addon_category::aggregate::AddOnCategory;

    fn addon(id: i64, name: &str, category: i64, price: f64) -> AddOn {
        AddOn {
            id: AddOnId(id),
            name: name.into(),
            category_id: AddOnCategoryId(category),
            price,
        }
    }

    fn state() -> AddOnListState {
        AddOnListState {
            addons: vec![
                addon(1, "Picnic lunch", 1, 12.0),
                addon(2, "binoculars", 2, 4.0),
                addon(3, "Dinner", 1, 30.0),
            ],
            ..AddOnListState::default()
        }
    }

    #[test]
    fn test_visible_rows_sorted_by_name_case_insensitive() {
        let names: Vec<_> = visible_rows(&state()).into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["binoculars", "Dinner", "Picnic lunch"]);
    }

    #[test]
    fn test_visible_rows_category_filter_and_price_sort() {
        let mut s = state();
        s.category_filter = Some(AddOnCategoryId(1));
        s.sort_field = "price".into();
        s.sort_ascending = false;
        let ids: Vec<_> = visible_rows(&s).into_iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_visible_rows_sorted_by_category_name() {
        let mut s = state();
        s.categories = vec![
            AddOnCategory { id: AddOnCategoryId(1), name: "Meals".into() },
            AddOnCategory { id: AddOnCategoryId(2), name: "Equipment".into() },
        ];
        s.sort_field = "category".into();
        let ids: Vec<_> = visible_rows(&s).into_iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        s.sort_ascending = false;
        let ids: Vec<_> = visible_rows(&s).into_iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_visible_rows_search() {
        let mut s = state();
        s.search = "LUNCH".into();
        assert_eq!(visible_rows(&s).len(), 1);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
        assert!(parse_price("twelve").is_err());
    }
}
