mod env_variable_utils;
mod summary;

use crate::env_variable_utils::CONFIG;
use crate::summary::api::GlooTransport;
use crate::summary::components::{ErrorBanner, SummaryCard, SummaryForm};
use web_sys::console;
use yew::prelude::*;
use yt_summary_core::{submit, SummaryView};

#[function_component(App)]
pub fn app() -> Html {
    let view = use_mut_ref(SummaryView::default);
    let force_update = use_force_update();

    let on_url_change = {
        let view = view.clone();
        let force_update = force_update.clone();
        Callback::from(move |url: String| {
            view.borrow_mut().set_url(url);
            force_update.force_update();
        })
    };

    let on_submit = {
        let view = view.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            let view = view.clone();
            let force_update = force_update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let transport = GlooTransport::new(CONFIG.webhook_url.clone());
                submit(&transport, &view, || force_update.force_update()).await;
            });
        })
    };

    let current = view.borrow();

    html! {
        <main class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto p-6">
                <h1 class="text-3xl font-bold mb-8">{ CONFIG.app_name.clone() }</h1>

                <SummaryForm
                    url={current.url().to_string()}
                    loading={current.loading()}
                    on_url_change={on_url_change}
                    on_submit={on_submit}
                />

                <ErrorBanner message={current.error().map(str::to_string)} />

                { match current.result() {
                    Some(result) => html! { <SummaryCard result={result.clone()} /> },
                    None => html! {},
                }}
            </div>
        </main>
    }
}

fn main() {
    let level = if CONFIG.debug_mode {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", WEBHOOK: \"{}\" DEBUG: \"{}\"",
            CONFIG.app_name, CONFIG.webhook_url, CONFIG.debug_mode
        )
        .into(),
    );
}
