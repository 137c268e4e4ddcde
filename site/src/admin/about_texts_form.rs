//! The "about texts" editor.
//!
//! Reads current values out of config, validates every field as required,
//! and writes back as three independent config upserts. On success the
//! config resource is refetched so every section picks up the new values;
//! whenever the upstream config changes the form is reset from the server
//! state, discarding unsaved local edits (server wins on reload).

use amparo_core::form::{AboutTexts, Field, FieldError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ConfigResource};

/// Outcome of the last submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveStatus {
    Saved,
    Failed(String),
}

#[component]
pub fn AboutTextsForm(configs: ConfigResource) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (status, set_status) = signal(None::<SaveStatus>);
    let (saving, set_saving) = signal(false);

    // Server wins on reload: re-seed the fields whenever the config list
    // changes (initial load, refetch after save, another editor's save).
    Effect::new(move |_| {
        if let Some(list) = api::loaded(configs) {
            let current = AboutTexts::from_configs(&list);
            set_name.set(current.name);
            set_title.set(current.professional_title);
            set_description.set(current.description);
            set_errors.set(Vec::new());
        }
    });

    let error_for = move |field: Field| {
        errors
            .get()
            .iter()
            .find(|e| e.field() == field)
            .map(ToString::to_string)
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let texts = AboutTexts {
            name: name.get(),
            professional_title: title.get(),
            description: description.get(),
        };
        match texts.validate() {
            Err(validation) => set_errors.set(validation),
            Ok(()) => {
                set_errors.set(Vec::new());
                set_saving.set(true);
                spawn_local(async move {
                    match api::save_about_texts(&texts).await {
                        Ok(()) => {
                            set_status.set(Some(SaveStatus::Saved));
                            // Explicit invalidation, never a local patch.
                            configs.refetch();
                        }
                        Err(err) => set_status.set(Some(SaveStatus::Failed(err.to_string()))),
                    }
                    set_saving.set(false);
                });
            }
        }
    };

    view! {
        <form class="admin-form" on:submit=submit>
            <div class="form-field">
                <label class="form-label" for="about-name">"Nome da Psicóloga"</label>
                <input
                    id="about-name"
                    class="form-input"
                    placeholder="Dra. (Adrielle Benhossi)"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <p class="form-hint">
                    "Use parênteses para aplicar gradiente. Ex: Dra. (Adrielle Benhossi)"
                </p>
                {move || {
                    error_for(Field::Name)
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
            </div>

            <div class="form-field">
                <label class="form-label" for="about-professional-title">
                    "Título Profissional"
                </label>
                <input
                    id="about-professional-title"
                    class="form-input"
                    placeholder="Psicóloga Clínica"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <p class="form-hint">"Título que aparece abaixo do nome na seção sobre"</p>
                {move || {
                    error_for(Field::ProfessionalTitle)
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
            </div>

            <div class="form-field">
                <label class="form-label" for="about-description">"Descrição Principal"</label>
                <textarea
                    id="about-description"
                    class="form-input"
                    rows="4"
                    placeholder="Com experiência em terapia cognitivo-comportamental..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <p class="form-hint">"Descrição detalhada sobre sua experiência e abordagem"</p>
                {move || {
                    error_for(Field::Description)
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Salvando..." } else { "Salvar Textos da Seção Sobre" }}
            </button>

            {move || {
                status
                    .get()
                    .map(|outcome| match outcome {
                        SaveStatus::Saved => {
                            view! {
                                <p class="form-toast success">
                                    "Textos da seção Sobre atualizados com sucesso!"
                                </p>
                            }
                                .into_any()
                        }
                        SaveStatus::Failed(message) => {
                            view! { <p class="form-toast error">{message}</p> }.into_any()
                        }
                    })
            }}
        </form>
    }
}
