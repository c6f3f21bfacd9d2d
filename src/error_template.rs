use http::status::StatusCode;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// Renders errors caught by the router fallback or an <ErrorBoundary/>.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };
    let errors = errors.get_untracked();

    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the server
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            response.set_status(errors[0].status_code());
        }
    }

    view! {
        <div class="flex flex-col items-center pt-16 text-gray-800 dark:text-gray-200">
            <h1 class="text-3xl font-bold">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _error)| *index
                children=move |error| {
                    let error_string = error.1.to_string();
                    let error_code = error.1.status_code();
                    view! {
                        <h2 class="text-xl pt-4">{error_code.to_string()}</h2>
                        <p class="pt-2">"Error: " {error_string}</p>
                    }
                }
            />
        </div>
    }
}
