use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{
    load_portfolio, JsonSource, PortfolioConfig, PortfolioData, PortfolioRuntime, StaticSource,
    ViewportBand,
};

use crate::bridge::{self, DomMessage};
use crate::components::{
    Contact, EasterEggs, Experience, FeaturedProjects, Hero, HowIWorkSection, NavHeader,
    Projects, Skills, ThemeValidation,
};
use crate::context::{apply_events, content_ready, now, with_runtime, PageState, SharedRuntime};
use crate::storage::BrowserFlagStore;
use crate::theme::GLOBAL_STYLES;

/// Longest the timer driver sleeps between checks
const TICK_MS: u64 = 100;

/// CMS dump endpoint, baked in at build time. Static content when unset.
const CMS_URL: Option<&str> = option_env!("PORTFOLIO_CMS_URL");

/// Root application component.
///
/// Provides global styles, the runtime and content contexts, the DOM
/// listeners and the timer driver.
#[component]
pub fn App() -> Element {
    let runtime: SharedRuntime = use_hook(|| Rc::new(RefCell::new(None)));
    let page: Signal<PageState> = use_signal(PageState::default);
    let mut portfolio: Signal<PortfolioData> = use_signal(|| load_portfolio(&StaticSource));

    // Provide runtime, page state and content to all child components
    use_context_provider(|| runtime.clone());
    use_context_provider(|| page);
    use_context_provider(|| portfolio);

    // Build the runtime on first render so sections can register against it
    use_hook({
        let runtime = runtime.clone();
        move || {
            let sections = portfolio.peek().sections();
            match PortfolioRuntime::new(
                PortfolioConfig::default(),
                sections,
                Box::new(BrowserFlagStore::new()),
            ) {
                Ok(mut rt) => {
                    rt.mount(now());
                    *runtime.borrow_mut() = Some(rt);
                    tracing::info!("Portfolio runtime initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize runtime: {}", e);
                }
            }
        }
    });

    // DOM listeners: keys, resizes and visibility
    use_future({
        let runtime = runtime.clone();
        move || {
            let runtime = runtime.clone();
            async move {
                let band = with_runtime(&runtime, |rt| {
                    ViewportBand::from_config(&rt.config().navigation)
                })
                .unwrap_or_default();
                let mut listeners = bridge::listen(&band, &portfolio.peek().sections());

                while let Some(msg) = bridge::next_message(&mut listeners).await {
                    let events = with_runtime(&runtime, |rt| match msg {
                        DomMessage::Key(input) => rt.key(&input, now()).events,
                        DomMessage::Resize { width } => {
                            rt.set_viewport_width(width);
                            Vec::new()
                        }
                        DomMessage::Visibility { samples } => rt.visibility(samples, now()),
                    });
                    if let Some(events) = events {
                        apply_events(page, events);
                    }
                }
            }
        }
    });

    // Timer driver: sleep until the next deadline, then fire it
    use_future({
        let runtime = runtime.clone();
        move || {
            let runtime = runtime.clone();
            async move {
                loop {
                    let wait = with_runtime(&runtime, |rt| rt.next_deadline())
                        .flatten()
                        .map(|deadline| deadline.as_millis().saturating_sub(now().as_millis()))
                        .unwrap_or(TICK_MS)
                        .clamp(1, TICK_MS);
                    gloo::timers::future::sleep(Duration::from_millis(wait)).await;

                    if let Some(events) = with_runtime(&runtime, |rt| rt.advance(now())) {
                        apply_events(page, events);
                    }
                }
            }
        }
    });

    // Resolve content, then restore the deep link against the final sections
    use_future({
        let runtime = runtime.clone();
        move || {
            let runtime = runtime.clone();
            async move {
                let sections = match CMS_URL {
                    Some(url) => match fetch_dump(url).await {
                        Ok(json) => {
                            let data = load_portfolio(&JsonSource::new(json));
                            let sections = data.sections();
                            portfolio.set(data);
                            Some(sections)
                        }
                        Err(e) => {
                            tracing::warn!("Failed to fetch content from {}: {}", url, e);
                            None
                        }
                    },
                    None => None,
                };

                bridge::next_frame().await;
                let fragment = bridge::read_fragment().await;
                if let Some(events) = with_runtime(&runtime, |rt| {
                    content_ready(rt, sections, fragment.as_deref(), now())
                }) {
                    apply_events(page, events);
                }
                if let Some(section) = page.peek().active.clone() {
                    bridge::scroll_to(&section);
                }
            }
        }
    });

    // Re-observe whenever the rendered sections change
    use_effect(move || {
        bridge::observe_sections(&portfolio().sections());
    });

    use_drop({
        let runtime = runtime.clone();
        move || {
            with_runtime(&runtime, |rt| rt.teardown());
            bridge::dispose();
        }
    });

    let owner = portfolio.read().profile.name.clone();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            NavHeader {}
            main { class: "page-main",
                Hero {}
                FeaturedProjects {}
                Projects {}
                Experience {}
                Skills {}
                HowIWorkSection {}
                ThemeValidation {}
                Contact {}
            }
            footer { class: "page-footer",
                "\u{00A9} {owner}"
            }
            EasterEggs {}
        }
    }
}

async fn fetch_dump(url: &str) -> Result<String, gloo::net::Error> {
    let response = gloo::net::http::Request::get(url).send().await?;
    if !response.ok() {
        return Err(gloo::net::Error::GlooError(format!(
            "HTTP {}",
            response.status()
        )));
    }
    response.text().await
}
