use shared::models::JobSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::format::{format_date, format_duration};
use crate::guard::protect_route;
use crate::session::SessionStore;

/// Every application runs a timed assessment on a fixed platform-wide clock.
const ASSESSMENT_SECONDS: u64 = 3_600;

/// Job listing for authenticated visitors of any role.
#[function_component(JobsPage)]
pub fn jobs_page() -> Html {
    let jobs = use_state(Vec::<JobSummary>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let jobs_handle = jobs.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        use_effect_with((), move |_| {
            if protect_route(&SessionStore::new(), &[]) {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.list_jobs().await {
                        Ok(Some(list)) => {
                            jobs_handle.set(list);
                            error_handle.set(None);
                        }
                        // Session expired mid-request; the wrapper already redirected.
                        Ok(None) => {}
                        Err(err) => {
                            error_handle.set(Some(format!("Failed to load jobs: {err}")));
                        }
                    }
                    loading_handle.set(false);
                });
            }
            || ()
        });
    }

    html! {
        <div class="p-4 space-y-4">
            <h1 class="text-2xl font-bold">{"Open positions"}</h1>
            <p class="text-sm text-base-content/70">
                { format!(
                    "Applying starts a timed assessment ({}).",
                    format_duration(ASSESSMENT_SECONDS)
                ) }
            </p>
            {
                (*error)
                    .clone()
                    .map_or_else(
                        || html! {},
                        |message| html! { <div class="alert alert-error">{ message }</div> },
                    )
            }
            {
                if *loading {
                    html! { <span class="loading loading-dots loading-md"></span> }
                } else if jobs.is_empty() {
                    html! { <p class="text-base-content/70">{"No open positions right now."}</p> }
                } else {
                    html! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            { for jobs.iter().map(job_card) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn job_card(job: &JobSummary) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl" key={job.id.clone()}>
            <div class="card-body">
                <h2 class="card-title">{ &job.title }</h2>
                <p class="text-sm font-medium">{ &job.company_name }</p>
                <p class="text-sm text-base-content/70">
                    { format!("{} · {}", job.location, job.experience_level) }
                </p>
                {
                    job.salary_range.as_ref().map_or_else(
                        || html! {},
                        |range| html! { <p class="text-sm">{ range.clone() }</p> },
                    )
                }
                <div class="card-actions justify-between items-center mt-2">
                    <span class="badge badge-outline">
                        { format!("{} vacancies", job.vacancies) }
                    </span>
                    <span class="text-xs text-base-content/60">
                        { format!("Posted {}", format_date(&job.created_at)) }
                    </span>
                </div>
            </div>
        </div>
    }
}
