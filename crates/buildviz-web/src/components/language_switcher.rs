use buildviz_core::Language;
use leptos::prelude::*;

#[component]
pub fn LanguageSwitcher(language: Memo<Language>, on_select: Callback<Language>) -> impl IntoView {
    view! {
        <div class="lang-switcher">
            {Language::all().iter().map(|l| {
                let l = *l;
                let is_selected = move || language.get() == l;
                view! {
                    <button
                        class=move || if is_selected() { "lang-btn active" } else { "lang-btn" }
                        data-lang=l.code()
                        on:click=move |_| on_select.run(l)
                    >
                        {l.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
