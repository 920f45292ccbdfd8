/// Popup UI for the Gmail Universal URL extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::command::ClipboardSink;
use crate::host::{active_tab_url, BrowserClipboard};
use crate::locator::{diagnose_url, GmailLocator};
use crate::notification::Notice;
use crate::ui::components::{LoadingMessage, UrlPreview};

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Found(GmailLocator),
    Unavailable(String),
}

#[derive(Clone, PartialEq)]
enum CopyState {
    Idle,
    Copying,
    Done(Notice),
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| PageState::Loading);
    let copy_state = use_state(|| CopyState::Idle);

    // Resolve the active tab on mount
    {
        let page = page.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                page.set(load_page_state().await);
            });
            || ()
        });
    }

    let on_copy = {
        let page = page.clone();
        let copy_state = copy_state.clone();

        Callback::from(move |_| {
            let PageState::Found(locator) = &*page else {
                return;
            };

            let url = locator.universal_url();
            let copy_state = copy_state.clone();
            copy_state.set(CopyState::Copying);

            spawn_local(async move {
                let notice = match BrowserClipboard.write_text(&url).await {
                    Ok(()) => {
                        log::info!("Copied URL: {}", url);
                        Notice::copied()
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        Notice::clipboard_failed()
                    }
                };
                copy_state.set(CopyState::Done(notice));
            });
        })
    };

    let is_busy = matches!(*copy_state, CopyState::Copying);
    let has_url = matches!(*page, PageState::Found(_));

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Gmail Universal URL"}</h1>

            {match &*page {
                PageState::Loading => html! {
                    <LoadingMessage message={Some("Reading active tab...".to_string())} />
                },
                PageState::Found(locator) => html! {
                    <UrlPreview url={locator.universal_url()} account={Some(locator.account.clone())} />
                },
                PageState::Unavailable(reason) => html! {
                    <Alert r#type={AlertType::Warning} title={reason.clone()} inline={true}>
                    </Alert>
                },
            }}

            <Button onclick={on_copy} disabled={is_busy || !has_url} variant={ButtonVariant::Primary} block={true}>
                {"Copy Universal URL"}
            </Button>

            {match &*copy_state {
                CopyState::Done(notice) if notice.is_error() => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {notice.message.clone()}
                    </Alert>
                },
                CopyState::Done(notice) => html! {
                    <Alert r#type={AlertType::Success} title={notice.message.clone()} inline={true}>
                    </Alert>
                },
                CopyState::Copying | CopyState::Idle => html! {},
            }}

            <p class="footer-popup">
                {"Gmail Universal URL v0.1.0"}
            </p>
        </div>
    }
}

async fn load_page_state() -> PageState {
    match active_tab_url().await {
        Ok(url) => match diagnose_url(&url) {
            Ok(locator) => PageState::Found(locator),
            Err(reason) => PageState::Unavailable(reason.to_string()),
        },
        Err(e) => {
            log::error!("{}", e);
            PageState::Unavailable(e)
        }
    }
}
