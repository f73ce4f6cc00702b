use std::fmt::Display;

use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::send_contact;
use crate::{
    contact::{ContactForm, ContactReply, StatusKind, SubmissionState},
    section::Section,
};

/// Field values of one form instance.
#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            subject: self.subject.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn clear(&self) {
        for field in [self.name, self.email, self.subject, self.message] {
            field.set(String::new());
        }
    }

    /// Settles a submission. Fields are cleared only when the message was delivered.
    fn apply<E: Display>(&self, result: Result<ContactReply, E>) -> SubmissionState {
        let settled = SubmissionState::settle(result);
        if matches!(settled, SubmissionState::Success(_)) {
            self.clear();
        }
        settled
    }
}

fn banner_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Success => "mb-6 p-4 rounded-lg bg-green-100 text-green-800 border border-green-200",
        StatusKind::Error => "mb-6 p-4 rounded-lg bg-red-100 text-red-800 border border-red-200",
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";

#[component]
pub fn ContactSection() -> impl IntoView {
    let fields = ContactFields::new();
    let ContactFields {
        name,
        email,
        subject,
        message,
    } = fields;
    let (state, set_state) = signal(SubmissionState::Idle);
    let submitting = move || state.with(SubmissionState::is_submitting);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(next) = state.with_untracked(SubmissionState::begin) else {
            return;
        };
        set_state.set(next);
        let form = fields.snapshot();
        spawn_local(async move {
            let settled = fields.apply(send_contact(form).await);
            set_state.set(settled);
        });
    };

    view! {
        <section
            id=Section::Contact.anchor()
            class="py-20 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-blue-50 to-indigo-100"
        >
            <div class="max-w-2xl mx-auto">
                <h2 class="text-3xl font-bold text-gray-900 mb-6 text-center">
                    "Vamos Trabalhar Juntos?"
                </h2>
                <p class="text-lg text-gray-600 mb-8 text-center">
                    "Estou sempre aberto a novos projetos e oportunidades. Entre em contato!"
                </p>
                <div class="bg-white rounded-lg shadow-lg p-8">
                    {move || {
                        state
                            .get()
                            .status()
                            .map(|status| {
                                view! {
                                    <div
                                        class=banner_class(status.kind)
                                        data-status=status.kind.as_str()
                                    >
                                        {status.message}
                                    </div>
                                }
                            })
                    }}
                    <form class="space-y-4" on:submit=on_submit>
                        <div>
                            <label for="contact-name" class=LABEL_CLASS>"Nome *"</label>
                            <input
                                id="contact-name"
                                type="text"
                                name="name"
                                class=INPUT_CLASS
                                bind:value=name
                            />
                        </div>
                        <div>
                            <label for="contact-email" class=LABEL_CLASS>"Email *"</label>
                            <input
                                id="contact-email"
                                type="email"
                                name="email"
                                class=INPUT_CLASS
                                bind:value=email
                            />
                        </div>
                        <div>
                            <label for="contact-subject" class=LABEL_CLASS>"Assunto"</label>
                            <input
                                id="contact-subject"
                                type="text"
                                name="subject"
                                class=INPUT_CLASS
                                bind:value=subject
                            />
                        </div>
                        <div>
                            <label for="contact-message" class=LABEL_CLASS>"Mensagem *"</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="5"
                                class=format!("{INPUT_CLASS} resize-none")
                                bind:value=message
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            disabled=submitting
                            class="w-full flex items-center justify-center space-x-2 px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || {
                                if submitting() {
                                    Either::Left(
                                        view! {
                                            <i class="extra-spinner animate-spin"></i>
                                            <span>"Enviando..."</span>
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <i class="extra-email"></i>
                                            <span>"Enviar Mensagem"</span>
                                        },
                                    )
                                }
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
