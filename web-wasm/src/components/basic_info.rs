//! 基本資料コンポーネント

use leptos::prelude::*;
use appraisal_common::{AppraisalForm, Brand, ScalarField};
use super::set_field;

#[component]
fn TextInput(
    id: &'static str,
    label: &'static str,
    field: ScalarField,
    form: RwSignal<AppraisalForm>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| set_field(form, field, event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn BasicInfo(form: RwSignal<AppraisalForm>) -> impl IntoView {
    let brand_options = Brand::ALL
        .into_iter()
        .map(|brand| {
            view! {
                <option
                    value=brand.label()
                    selected=move || form.with(|f| f.brand == brand)
                >
                    {brand.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h2 class="section-title">"基本資料"</h2>
            <div class="info-grid">
                <div class="form-group">
                    <label for="brand">"品牌"</label>
                    <select
                        id="brand"
                        on:change=move |ev| set_field(form, ScalarField::Brand, event_target_value(&ev))
                    >
                        {brand_options}
                    </select>
                </div>
                <TextInput id="warranty-date" label="保卡日期" field=ScalarField::WarrantyDate form=form />
                <TextInput id="model-number" label="型號" field=ScalarField::ModelNumber form=form />
                <TextInput id="serial-number" label="序號" field=ScalarField::SerialNumber form=form />
            </div>
        </section>
    }
}
