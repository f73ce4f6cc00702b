mod contact;
mod nav;
mod sections;

use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode};

use crate::{
    contact::{ContactForm, ContactReply},
    fallback::Fallback,
    metadata::PageMetadata,
    portfolio::PortfolioData,
};

pub use sections::Portfolio;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // fully rendered on the server so <head> carries the profile metadata
                <Route path=path!("/") view=HomePage ssr=SsrMode::Async />
            </Routes>
        </Router>
    }
}

#[server(input = GetUrl)]
pub async fn get_portfolio() -> Result<Option<PortfolioData>, ServerFnError> {
    use crate::api::PortfolioClient;

    let client = use_context::<PortfolioClient>()
        .ok_or_else(|| ServerFnError::new("Portfolio client missing from context"))?;
    Ok(client.load_portfolio().await)
}

#[server]
pub async fn send_contact(form: ContactForm) -> Result<ContactReply, ServerFnError> {
    use crate::api::PortfolioClient;

    let client = use_context::<PortfolioClient>()
        .ok_or_else(|| ServerFnError::new("Portfolio client missing from context"))?;
    client.submit_contact(&form).await.map_err(|e| {
        tracing::warn!(error = %e, "contact submission failed");
        ServerFnError::new(e)
    })
}

/// Landing page: loads the portfolio once and hands it to [`Portfolio`].
#[component]
fn HomePage() -> impl IntoView {
    let portfolio = Resource::new(
        || (),
        |_| async move { get_portfolio().await.ok().flatten() },
    );

    view! {
        <Suspense>
            {move || Suspend::new(async move {
                let data = portfolio.await;
                view! {
                    <PortfolioMeta meta=PageMetadata::from_portfolio(data.as_ref()) />
                    <PageBody data />
                }
            })}
        </Suspense>
    }
}

#[component]
fn PageBody(data: Option<PortfolioData>) -> impl IntoView {
    match data {
        Some(initial_data) => Either::Left(view! { <Portfolio initial_data /> }),
        None => Either::Right(view! { <LoadError /> }),
    }
}

#[component]
fn PortfolioMeta(meta: PageMetadata) -> impl IntoView {
    let PageMetadata {
        title,
        description,
        og_title,
        og_description,
        og_images,
    } = meta;
    view! {
        <Title text=title />
        <Meta name="description" content=description />
        {og_title.map(|content| view! { <Meta property="og:title" content /> })}
        {og_description.map(|content| view! { <Meta property="og:description" content /> })}
        {og_images
            .into_iter()
            .map(|content| view! { <Meta property="og:image" content /> })
            .collect_view()}
    }
}

#[component]
fn LoadError() -> impl IntoView {
    view! {
        <div id="load-error" class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="text-center">
                <h1 class="text-2xl font-bold text-gray-900 mb-4">
                    {Fallback::LoadErrorTitle.text()}
                </h1>
                <p class="text-gray-600">{Fallback::LoadErrorHint.text()}</p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::portfolio::Profile;

    fn render(data: Option<PortfolioData>) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <PageBody data /> }.to_html())
    }

    #[test]
    fn test_failed_load_renders_only_error_panel() {
        let html = render(None);
        assert!(html.contains("Erro ao carregar portfólio"));
        assert!(html.contains("Por favor, tente novamente mais tarde."));
        assert!(!html.contains("id=\"sobre\""));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_loaded_page_exposes_all_anchors() {
        let data = PortfolioData {
            profile: Some(Profile {
                name: Some("Ana".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let html = render(Some(data));
        for anchor in ["sobre", "projetos", "habilidades", "contato"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing {anchor}");
        }
        assert!(!html.contains("Erro ao carregar portfólio"));
    }
}
