use buildviz_core::dataset::FOOTER;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{FOOTER}</p>
        </footer>
    }
}
