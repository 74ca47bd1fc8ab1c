use contracts::catalog::brand::{Brand, CreateBrandDto, UpdateBrandDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::brand::api;
use crate::shared::slug::{is_valid_slug, slugify};

/// Create/edit form for a brand.
///
/// The slug follows the name while the user has not touched the slug
/// field; a manual edit detaches it.
#[component]
pub fn BrandDetails(
    brand: Option<Brand>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = brand.as_ref().map(|b| b.id);
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(brand.as_ref().map(|b| b.name.clone()).unwrap_or_default());
    let (slug, set_slug) = signal(brand.as_ref().map(|b| b.slug.clone()).unwrap_or_default());
    let (slug_touched, set_slug_touched) = signal(is_edit);
    let (description, set_description) = signal(
        brand
            .as_ref()
            .and_then(|b| b.description.clone())
            .unwrap_or_default(),
    );
    let (logo_url, set_logo_url) = signal(
        brand
            .as_ref()
            .and_then(|b| b.logo_url.clone())
            .unwrap_or_default(),
    );
    let (is_active, set_is_active) = signal(brand.as_ref().map(|b| b.is_active).unwrap_or(true));

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let handle_name_input = move |value: String| {
        if !slug_touched.get_untracked() {
            set_slug.set(slugify(&value));
        }
        set_name.set(value);
    };

    let handle_slug_input = move |value: String| {
        set_slug_touched.set(true);
        set_slug.set(value);
    };

    let validate = move || -> Result<(), String> {
        if name.get_untracked().trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if !is_valid_slug(&slug.get_untracked()) {
            return Err("Slug must be lowercase letters, digits and dashes".to_string());
        }
        Ok(())
    };

    let handle_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(e) = validate() {
            set_error.set(Some(e));
            return;
        }

        let name_val = name.get_untracked().trim().to_string();
        let slug_val = slug.get_untracked();
        let description_val = {
            let d = description.get_untracked();
            if d.trim().is_empty() { None } else { Some(d) }
        };
        let logo_val = {
            let l = logo_url.get_untracked();
            if l.trim().is_empty() { None } else { Some(l) }
        };
        let active_val = is_active.get_untracked();

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_brand(UpdateBrandDto {
                    id,
                    name: name_val,
                    slug: slug_val,
                    description: description_val,
                    logo_url: logo_val,
                    is_active: active_val,
                })
                .await,
                None => api::create_brand(CreateBrandDto {
                    name: name_val,
                    slug: slug_val,
                    description: description_val,
                    logo_url: logo_val,
                    is_active: active_val,
                })
                .await
                .map(|_| ()),
            };
            set_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-form">
            <h2>{if is_edit { "Edit brand" } else { "New brand" }}</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form on:submit=handle_save>
                <div class="form-group">
                    <label for="brand-name">"Name"</label>
                    <input
                        type="text"
                        id="brand-name"
                        prop:value=move || name.get()
                        on:input=move |ev| handle_name_input(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="brand-slug">"Slug"</label>
                    <input
                        type="text"
                        id="brand-slug"
                        class="mono"
                        prop:value=move || slug.get()
                        on:input=move |ev| handle_slug_input(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="brand-description">"Description"</label>
                    <textarea
                        id="brand-description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="brand-logo">"Logo URL"</label>
                    <input
                        type="text"
                        id="brand-logo"
                        prop:value=move || logo_url.get()
                        on:input=move |ev| set_logo_url.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                </div>

                <div class="form-group form-group-inline">
                    <input
                        type="checkbox"
                        id="brand-active"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| set_is_active.set(event_target_checked(&ev))
                        disabled=move || saving.get()
                    />
                    <label for="brand-active">"Active"</label>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.run(())
                        disabled=move || saving.get()
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
