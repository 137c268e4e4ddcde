use amparo_core::config;
use leptos::prelude::*;

use crate::api::{self, ConfigResource};

#[component]
pub fn Footer(configs: ConfigResource) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="footer-title">"Amparo · Psicologia"</span>
                <span class="footer-crp">
                    {move || {
                        let list = api::loaded(configs).unwrap_or_default();
                        format!("CRP: {}", config::general_info(&list).display_crp())
                    }}
                </span>
                <p class="footer-copyright">"© 2026 Amparo"</p>
            </div>
        </footer>
    }
}
