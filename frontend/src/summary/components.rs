use web_sys::HtmlInputElement;
use yew::prelude::*;
use yt_summary_core::markdown::render_markdown;
use yt_summary_core::video_id::embed_url;
use yt_summary_core::SummaryResult;

#[derive(Properties, PartialEq)]
pub struct SummaryFormProps {
    pub url: String,
    pub loading: bool,
    pub on_url_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub video_id: String,
}

#[derive(Properties, PartialEq)]
pub struct SummaryCardProps {
    pub result: SummaryResult,
}

#[function_component(SummaryForm)]
pub fn summary_form(props: &SummaryFormProps) -> Html {
    let on_input = {
        let on_url_change = props.on_url_change.clone();
        Callback::from(move |e: InputEvent| {
            on_url_change.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form onsubmit={on_submit} class="mb-8">
            <div class="flex gap-4">
                <input
                    type="text"
                    class="flex-1 p-2 border rounded"
                    placeholder="Enter YouTube URL"
                    value={props.url.clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="bg-blue-500 text-white px-6 py-2 rounded disabled:bg-blue-300"
                    disabled={props.loading}
                >
                    {
                        if props.loading {
                            html! {
                                <span class="flex items-center gap-2">
                                    <span class="inline-block w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                                    {"Processing"}
                                </span>
                            }
                        } else {
                            html! { {"Summarize"} }
                        }
                    }
                </button>
            </div>
        </form>
    }
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    match &props.message {
        Some(msg) => html! {
            <div class="bg-red-100 border-l-4 border-red-500 text-red-700 p-4 mb-4">
                { msg }
            </div>
        },
        None => html! {},
    }
}

#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="mb-6">
            <div class="aspect-video w-full mb-4">
                <iframe
                    src={embed_url(&props.video_id)}
                    class="w-full h-full"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}

#[function_component(SummaryCard)]
pub fn summary_card(props: &SummaryCardProps) -> Html {
    let result = &props.result;
    // The webhook's markdown is trusted and injected as-is.
    let summary_html = Html::from_html_unchecked(AttrValue::from(render_markdown(&result.summary)));

    html! {
        <div class="bg-white rounded-lg shadow-lg p-6">
            <h2 class="text-2xl font-bold mb-4">{ &result.title }</h2>

            { match &result.video_id {
                Some(video_id) => html! { <VideoEmbed video_id={video_id.clone()} /> },
                None => html! {},
            }}

            <div class="prose max-w-none">
                <h3 class="text-xl font-semibold mb-2">{"Summary"}</h3>
                <div class="markdown">{ summary_html }</div>

                <h3 class="text-xl font-semibold mt-6 mb-2">{"Description"}</h3>
                <div class="whitespace-pre-wrap text-gray-600">
                    { &result.description }
                </div>
            </div>
        </div>
    }
}
