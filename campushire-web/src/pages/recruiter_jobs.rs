use shared::models::{JobStatus, JobSummary, UserRole};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::format::format_date;
use crate::guard::protect_route;
use crate::session::SessionStore;

/// Posting management view, recruiters only.
#[function_component(RecruiterJobsPage)]
pub fn recruiter_jobs_page() -> Html {
    let jobs = use_state(Vec::<JobSummary>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let jobs_handle = jobs.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        use_effect_with((), move |_| {
            if protect_route(&SessionStore::new(), &[UserRole::Recruiter]) {
                spawn_local(async move {
                    let client = ApiClient::shared();
                    match client.list_recruiter_jobs().await {
                        Ok(Some(list)) => {
                            jobs_handle.set(list);
                            error_handle.set(None);
                        }
                        Ok(None) => {}
                        Err(err) => {
                            error_handle.set(Some(format!("Failed to load postings: {err}")));
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
            <h1 class="text-2xl font-bold">{"Your postings"}</h1>
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
                    html! { <p class="text-base-content/70">{"You have not posted any jobs yet."}</p> }
                } else {
                    html! {
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"Title"}</th>
                                        <th>{"Location"}</th>
                                        <th>{"Status"}</th>
                                        <th>{"Vacancies"}</th>
                                        <th>{"Posted"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for jobs.iter().map(posting_row) }
                                </tbody>
                            </table>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn posting_row(job: &JobSummary) -> Html {
    let status_class = match job.status {
        JobStatus::Active => "badge badge-success",
        JobStatus::Draft => "badge badge-ghost",
        JobStatus::Closed => "badge badge-neutral",
    };
    let status_label = match job.status {
        JobStatus::Active => "active",
        JobStatus::Draft => "draft",
        JobStatus::Closed => "closed",
    };

    html! {
        <tr key={job.id.clone()}>
            <td class="font-medium">{ &job.title }</td>
            <td>{ &job.location }</td>
            <td><span class={status_class}>{ status_label }</span></td>
            <td>{ job.vacancies }</td>
            <td>{ format_date(&job.created_at) }</td>
        </tr>
    }
}
