use buildviz_core::dataset::HEADING;
use buildviz_core::Language;
use leptos::prelude::*;

#[component]
pub fn Header(language: Memo<Language>) -> impl IntoView {
    let bundle = move || language.get().bundle();

    view! {
        <header class="header">
            <div class="badge rust-gradient">{move || bundle().badge}</div>
            <h1>{HEADING}</h1>
            <p class="subtitle">{move || bundle().subtitle}</p>
        </header>
    }
}
