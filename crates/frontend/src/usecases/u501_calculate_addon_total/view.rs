use super::view_model::AddOnCalculatorVm;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a001_addon::aggregate::AddOn;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddOnCalculatorPage() -> impl IntoView {
    let vm = AddOnCalculatorVm::new();

    // Load the catalog on mount
    Effect::new(move || vm.load_catalog());

    view! {
        <PageFrame page_id="u501_calculate_addon_total--usecase" category=PAGE_CAT_USECASE title="Add-on Calculator">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <Select value=vm.category_filter>
                    <option value="">"All categories"</option>
                    {move || vm.categories.get().into_iter().map(|c| view! {
                        <option value=c.id.as_string()>{c.name}</option>
                    }).collect_view()}
                </Select>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.load_catalog()
                    disabled=vm.loading
                >
                    "Refresh"
                </Button>
            </Flex>

            {move || vm.error.get().map(|err| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{err}</span>
                </MessageBar>
            })}

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                        <span>"Loading add-ons..."</span>
                    </Flex>
                }
            >
                <Flex vertical=true gap=FlexGap::Medium>
                    {move || vm.groups().into_iter().map(|(category, items)| view! {
                        <div class="addon-group">
                            <h3 class="addon-group__title">{category.name}</h3>
                            {if items.is_empty() {
                                view! { <p class="addon-group__empty">"No add-ons in this category"</p> }.into_any()
                            } else {
                                view! {
                                    <Flex vertical=true gap=FlexGap::Small>
                                        {items.into_iter().map(|addon| view! { <AddOnRow vm=vm addon=addon /> }).collect_view()}
                                    </Flex>
                                }.into_any()
                            }}
                        </div>
                    }).collect_view()}
                </Flex>
            </Show>

            <div class="addon-total">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <strong>{move || format!("Total: {}", format_money(vm.total()))}</strong>
                    <Show when=move || vm.is_computing()>
                        <Spinner size=SpinnerSize::Small />
                    </Show>
                </Flex>
                {move || vm.last_error().map(|err| view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <span>{format!("Total not updated: {}", err)}</span>
                    </MessageBar>
                })}
            </div>
        </PageFrame>
    }
}

/// One add-on: selection checkbox, name and price, count once selected
#[component]
fn AddOnRow(vm: AddOnCalculatorVm, addon: AddOn) -> impl IntoView {
    let id = addon.id;
    let checkbox_id = format!("addon-{}", id);

    view! {
        <div class="addon-row">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    type="checkbox"
                    id=checkbox_id.clone()
                    prop:checked=move || vm.is_selected(id)
                    on:change=move |_| vm.toggle(id)
                />
                <label for=checkbox_id>
                    {format!("{} ({})", addon.name, format_money(addon.price))}
                </label>
                <Show when=move || vm.is_selected(id)>
                    <input
                        type="number"
                        class="addon-row__count"
                        min="1"
                        step="1"
                        prop:value=move || vm.count(id).map(|c| c.to_string()).unwrap_or_default()
                        on:change=move |ev| vm.set_count(id, &event_target_value(&ev))
                    />
                </Show>
            </Flex>
            {move || vm.input_error(id).map(|err| view! {
                <span class="addon-row__error">{err}</span>
            })}
        </div>
    }
}
