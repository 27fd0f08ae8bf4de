use buildviz_core::{DashboardConfig, DashboardState, Language};
use leptos::prelude::*;

use crate::components::core_load::CoreLoad;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::impact::ImpactSection;
use crate::components::language_switcher::LanguageSwitcher;
use crate::components::performance::PerformanceChart;
use crate::ticker::use_ticker;

#[component]
pub fn App() -> impl IntoView {
    view! { <Dashboard config=DashboardConfig::default() /> }
}

/// The whole page. Language lives in [`DashboardState`], the stage index in
/// the ticker.
#[component]
pub fn Dashboard(config: DashboardConfig) -> impl IntoView {
    let state = RwSignal::new(DashboardState::new(&config));
    let stage = use_ticker(&config);

    let language = Memo::new(move |_| state.with(|s| s.language()));
    let on_select = Callback::new(move |lang: Language| state.update(|s| s.select(lang)));

    view! {
        <div
            class="dashboard"
            data-lang=move || language.get().code()
            data-stage=move || stage.get().to_string()
        >
            <LanguageSwitcher language=language on_select=on_select />
            <Header language=language />
            <ImpactSection language=language />
            <section class="performance-grid">
                <PerformanceChart />
                <CoreLoad />
            </section>
            <Footer />
        </div>
    }
}
