pub mod state;

use self::state::{create_state, parse_count, RuleForm};
use crate::domain::a003_tour::api as tour_api;
use crate::domain::a004_pricing_rule::api;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_pricing_rule::aggregate::{applicable_rule, PricingRule};
use contracts::domain::a004_pricing_rule::cost::CostCalculationRequest;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Read the cost calculator fields into a request
pub fn cost_request(tour_id: &str, adults: &str, children: &str) -> Result<CostCalculationRequest, String> {
    let tour_id = tour_id.trim();
    if tour_id.is_empty() {
        return Err("Select a tour".into());
    }
    let adults = parse_count("Adults", adults)?;
    if adults == 0 {
        return Err("At least one adult is required".into());
    }
    Ok(CostCalculationRequest {
        adults,
        children: parse_count("Children", children)?,
        tour_id: tour_id.to_string(),
    })
}

#[component]
#[allow(non_snake_case)]
pub fn PricingRuleList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Rule form
    let tour_id = RwSignal::new(String::new());
    let min_adults = RwSignal::new("1".to_string());
    let max_adults = RwSignal::new("1".to_string());
    let price_per_adult = RwSignal::new("0".to_string());
    let price_per_child = RwSignal::new("0".to_string());

    // Cost calculator
    let calc_tour = RwSignal::new(String::new());
    let calc_adults = RwSignal::new("1".to_string());
    let calc_children = RwSignal::new("0".to_string());
    let (calc_result, set_calc_result) = signal::<Option<Result<f64, String>>>(None);
    let (calculating, set_calculating) = signal(false);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match (tour_api::fetch_all().await, api::fetch_all().await) {
                (Ok(tours), Ok(rules)) => state.update(|s| {
                    s.tours = tours;
                    s.rules = rules;
                    s.is_loaded = true;
                }),
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("pricing rules load failed: {}", e);
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

    let fill_form = move |form: RuleForm| {
        tour_id.set(form.tour_id);
        min_adults.set(form.min_adults);
        max_adults.set(form.max_adults);
        price_per_adult.set(form.price_per_adult);
        price_per_child.set(form.price_per_child);
    };

    let reset_form = move || {
        fill_form(RuleForm::default());
        state.update(|s| s.editing = None);
    };

    let save = move || {
        let form = RuleForm {
            tour_id: tour_id.get_untracked(),
            min_adults: min_adults.get_untracked(),
            max_adults: max_adults.get_untracked(),
            price_per_adult: price_per_adult.get_untracked(),
            price_per_child: price_per_child.get_untracked(),
        };
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        let editing = state.with_untracked(|s| s.editing.clone());
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update(&id, &dto).await,
                None => api::create(&dto).await,
            };
            match result {
                Ok(rule) => {
                    log::info!("pricing rule {} saved", rule.id);
                    state.update(|s| s.upsert(rule));
                    set_error.set(None);
                    reset_form();
                }
                Err(e) => set_error.set(Some(format!("Failed to save pricing rule: {}", e))),
            }
        });
    };

    let start_edit = move |rule: PricingRule| {
        fill_form(RuleForm::from_rule(&rule));
        state.update(|s| s.editing = Some(rule.id));
    };

    let remove = move |id: String| {
        spawn_local(async move {
            match api::delete_by_id(&id).await {
                Ok(()) => {
                    log::info!("pricing rule {} deleted", id);
                    state.update(|s| s.remove(&id));
                }
                Err(e) => set_error.set(Some(format!("Failed to delete pricing rule: {}", e))),
            }
        });
    };

    let calculate = move || {
        let request = match cost_request(
            &calc_tour.get_untracked(),
            &calc_adults.get_untracked(),
            &calc_children.get_untracked(),
        ) {
            Ok(r) => r,
            Err(e) => {
                set_calc_result.set(Some(Err(e)));
                return;
            }
        };
        spawn_local(async move {
            set_calculating.set(true);
            let result = api::calculate_cost(&request).await;
            if let Err(e) = &result {
                log::warn!("cost calculation failed: {}", e);
            }
            set_calc_result.set(Some(result));
            set_calculating.set(false);
        });
    };

    // Rule whose band covers the calculator's party; highlighted in the table
    let highlighted = Memo::new(move |_| {
        let tour = calc_tour.get();
        let adults = calc_adults.get().trim().parse::<u32>().ok()?;
        state.with(|s| applicable_rule(&s.rules, &tour, adults).map(|r| r.id.clone()))
    });

    let tour_options = move || {
        state
            .with(|s| s.tours.clone())
            .into_iter()
            .map(|t| view! { <option value=t.id.as_string()>{t.name}</option> })
            .collect_view()
    };

    view! {
        <PageFrame page_id="a004_pricing_rule--list" category=PAGE_CAT_LIST title="Adult/Child Pricing Rules">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <span>{move || state.with(|s| format!("{} rules", s.rules.len()))}</span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|err| view! {
                <div class="error-message">{err}</div>
            })}

            <div class="form">
                <h3>{move || if state.with(|s| s.editing.is_some()) { "Edit Pricing Rule" } else { "Add Pricing Rule" }}</h3>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=tour_id>
                        <option value="">"-- Tour --"</option>
                        {tour_options}
                    </Select>
                    <Input value=min_adults input_type=InputType::Number placeholder="Min adults" />
                    <Input value=max_adults input_type=InputType::Number placeholder="Max adults" />
                    <Input value=price_per_adult input_type=InputType::Number placeholder="Price per adult" />
                    <Input value=price_per_child input_type=InputType::Number placeholder="Price per child" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| save()>
                        {move || if state.with(|s| s.editing.is_some()) { "Update" } else { "Create" }}
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
                fallback=|| view! { <Spinner /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Tour"</TableHeaderCell>
                            <TableHeaderCell>"Adults"</TableHeaderCell>
                            <TableHeaderCell>"Price per adult"</TableHeaderCell>
                            <TableHeaderCell>"Price per child"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || state.with(|s| s.rules.clone()).into_iter().map(|rule| {
                            let id = rule.id.clone();
                            let row_id = rule.id.clone();
                            let for_edit = rule.clone();
                            let applies = move || highlighted.get().as_deref() == Some(row_id.as_str());
                            let tour_name = rule.tour_name().to_string();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {tour_name}
                                            <Show when=applies>
                                                <span class="badge badge--success">" applies"</span>
                                            </Show>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{format!("{} - {}", rule.min_adults, rule.max_adults)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_money(rule.price_per_adult)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format_money(rule.price_per_child)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <Space>
                                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| start_edit(for_edit.clone())>
                                                "Edit"
                                            </Button>
                                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| remove(id.clone())>
                                                "Delete"
                                            </Button>
                                        </Space>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>

            <div class="form">
                <h3>"Calculate Cost"</h3>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=calc_tour>
                        <option value="">"-- Tour --"</option>
                        {tour_options}
                    </Select>
                    <Input value=calc_adults input_type=InputType::Number placeholder="Adults" />
                    <Input value=calc_children input_type=InputType::Number placeholder="Children" />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| calculate() disabled=calculating>
                        "Calculate"
                    </Button>
                </Flex>
                {move || calc_result.get().map(|result| match result {
                    Ok(total) => view! { <p class="calc-total">{format!("Total cost: {}", format_money(total))}</p> }.into_any(),
                    Err(e) => view! { <div class="error-message">{e}</div> }.into_any(),
                })}
            </div>
        </PageFrame>
    }
}
