use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use sample_ui::prelude::*;

use crate::scenario::GalleryScenario;

#[component]
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sample UI Gallery" />
        <Meta name="description" content="Live examples of the sample_ui Button and Card components." />

        <Router>
            <main class="gallery-root">
                <Routes>
                    <Route path="" view=GalleryIndex />
                    <Route path="/scenario/:id" view=ScenarioRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Lists every scenario, or mounts one alone when `?scenario=<id>` is present.
#[component]
fn GalleryIndex() -> impl IntoView {
    let query = use_query_map();
    let selected = move || {
        query
            .with(|map| map.get("scenario").cloned())
            .and_then(|raw| GalleryScenario::parse(&raw))
    };

    view! {
        {move || match selected() {
            Some(scenario) => view! { <ScenarioView scenario /> }.into_view(),
            None => view! {
                <section class="gallery-index">
                    <h1>"Sample UI Gallery"</h1>
                    {GalleryScenario::ALL
                        .into_iter()
                        .map(|scenario| {
                            view! {
                                <section class="gallery-entry" data-scenario=scenario.id()>
                                    <h2>
                                        <A href=scenario.path()>{scenario.title()}</A>
                                    </h2>
                                    <ScenarioView scenario />
                                </section>
                            }
                        })
                        .collect_view()}
                </section>
            }
            .into_view(),
        }}
    }
}

#[component]
fn ScenarioRoute() -> impl IntoView {
    let params = use_params_map();
    let id = move || {
        params
            .with(|map| map.get("id").cloned())
            .unwrap_or_default()
    };

    view! {
        {move || {
            let id = id();
            match id.parse::<GalleryScenario>() {
                Ok(scenario) => view! { <ScenarioView scenario /> }.into_view(),
                Err(err) => {
                    logging::warn!("gallery route: {err}");
                    view! {
                        <section class="gallery-missing">
                            <h1>"Scenario not found"</h1>
                            <p>{format!("No scenario is registered as `{id}`.")}</p>
                            <A href="/">"Back to gallery"</A>
                        </section>
                    }
                    .into_view()
                }
            }
        }}
    }
}

#[component]
/// Mounts one scenario with an activation counter for interactive checks.
pub fn ScenarioView(scenario: GalleryScenario) -> impl IntoView {
    let activations = create_rw_signal(0u32);
    let on_activate = Callback::new(move |()| {
        activations.update(|count| *count += 1);
        logging::log!("gallery: {} activated", scenario.id());
    });

    let demo = match scenario {
        GalleryScenario::ButtonDefault => view! {
            <Button label="送信" on_activate />
        }
        .into_view(),
        GalleryScenario::ButtonDanger => view! {
            <Button label="削除" variant=ButtonVariant::Danger on_activate />
        }
        .into_view(),
        GalleryScenario::ButtonSmall => view! {
            <Button label="小" size=ButtonSize::Small on_activate />
        }
        .into_view(),
        GalleryScenario::ButtonLarge => view! {
            <Button label="大" size=ButtonSize::Large on_activate />
        }
        .into_view(),
        GalleryScenario::ButtonDisabled => view! {
            <Button label="無効" on_activate disabled=true />
        }
        .into_view(),
        GalleryScenario::CardBasic => view! {
            <Card title="ユーザー情報">
                <p>"名前: 山田太郎"</p>
            </Card>
        }
        .into_view(),
        GalleryScenario::CardWithFooter => view! {
            <Card
                title="タイトル"
                footer=move || view! { <Button label="アクション" on_activate /> }
            >
                "コンテンツ"
            </Card>
        }
        .into_view(),
        GalleryScenario::CardFixedWidth => view! {
            <Card title="幅指定" width=CardWidth::px(400)>
                "コンテンツ"
            </Card>
        }
        .into_view(),
        GalleryScenario::CardWithoutFooter => view! {
            <Card title="フッターなし">"コンテンツのみ"</Card>
        }
        .into_view(),
    };

    view! {
        <div class="gallery-scenario" data-scenario=scenario.id()>
            <div class="gallery-demo">{demo}</div>
            <output class="gallery-activations" data-testid="activation-count">
                {move || activations.get()}
            </output>
        </div>
    }
}
