use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::lead::{LeadField, LeadForm as LeadFormState, SUBMITTED_FEEDBACK};

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let form = use_state(LeadFormState::default);
    let feedback = use_state(String::new);

    let on_input = |field: LeadField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(LeadField::Message, input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let submission = match form.validate() {
                Ok(submission) => submission,
                Err(err) => {
                    feedback.set(err.to_string());
                    return;
                }
            };

            let uri = submission.mailto_uri(config::SALES_EMAIL);
            let opened = web_sys::window()
                .map(|window| window.location().set_href(&uri))
                .transpose();
            match opened {
                Ok(Some(())) => info!("Opened mail client for inquiry from {}", submission.name),
                Ok(None) => warn!("No window to open the mail client from"),
                Err(e) => warn!("Failed to open mail client: {:?}", e),
            }

            feedback.set(SUBMITTED_FEEDBACK.to_string());
            form.set(LeadFormState::default());
        })
    };

    html! {
        <form class="surface-card lead-form" onsubmit={on_submit}>
            <h3>{"Talk to the team"}</h3>
            <p class="lead-form-intro">
                {"Share your campaign goals and we will help map the rollout plan."}
            </p>

            <div class="lead-form-fields">
                <label for="lead-name">
                    {"Full name"}
                    <input
                        id="lead-name"
                        value={form.name.clone()}
                        oninput={on_input(LeadField::Name)}
                        placeholder="Alex Morgan"
                        required=true
                    />
                </label>

                <label for="lead-email">
                    {"Work email"}
                    <input
                        id="lead-email"
                        type="email"
                        value={form.email.clone()}
                        oninput={on_input(LeadField::Email)}
                        placeholder="alex@company.com"
                        required=true
                    />
                </label>

                <label for="lead-company">
                    {"Company"}
                    <input
                        id="lead-company"
                        value={form.company.clone()}
                        oninput={on_input(LeadField::Company)}
                        placeholder="Northline"
                    />
                </label>

                <label for="lead-message">
                    {"What are you trying to improve?"}
                    <textarea
                        id="lead-message"
                        value={form.message.clone()}
                        oninput={on_message_input}
                        placeholder="Current workflow, send volume, and target outcome."
                        required=true
                    />
                </label>
            </div>

            <div class="lead-form-actions">
                <button class="button-primary" type="submit">
                    {"Send inquiry"}
                </button>
                <p aria-live="polite" class="lead-form-feedback">
                    {(*feedback).clone()}
                </p>
            </div>
        </form>
    }
}
