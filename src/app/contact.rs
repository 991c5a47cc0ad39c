use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};

use super::icon::SvgIcon;
use super::reveal::{use_in_view_once, Reveal};
use super::toaster::Toaster;
use crate::contact::{
    Ack, ContactField, ContactFields, ContactFlow, ContactMessage, Delay, FormSurface,
    SimulatedTransport, SubmissionState, SubmitOutcome, Transport, TransportError, TransportKind,
};
use crate::content::{Section, SOCIAL_LINKS};
use crate::motion::RevealFrom;

/// Transport selected by `PORTFOLIO_CONTACT_TRANSPORT` when the crate was built.
pub fn contact_transport() -> TransportKind {
    TransportKind::from_name(env!("PORTFOLIO_CONTACT_TRANSPORT"))
}

#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<Ack, ServerFnError> {
    let ack = crate::contact::receive_message(&message).map_err(|err| {
        tracing::warn!(%err, "rejected contact message");
        ServerFnError::new(err.to_string())
    })?;
    tracing::info!(
        name = %message.name,
        email = %message.email,
        subject = %message.subject,
        length = message.message.len(),
        "contact message received"
    );
    Ok(ack)
}

/// Sleeps on whichever runtime the component is running under.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeDelay;

impl Delay for RuntimeDelay {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "hydrate"))]
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SiteTransport {
    Simulated(SimulatedTransport<RuntimeDelay>),
    Server,
}

impl From<TransportKind> for SiteTransport {
    fn from(kind: TransportKind) -> Self {
        match kind {
            TransportKind::Simulated => Self::Simulated(SimulatedTransport::new(RuntimeDelay)),
            TransportKind::Server => Self::Server,
        }
    }
}

impl Transport for SiteTransport {
    async fn send(&self, message: ContactMessage) -> Result<Ack, TransportError> {
        match self {
            Self::Simulated(transport) => transport.send(message).await,
            Self::Server => send_contact_message(message).await.map_err(transport_error),
        }
    }
}

/// Rejections raised by the server function keep their message as-is.
fn transport_error(err: ServerFnError) -> TransportError {
    match err {
        ServerFnError::ServerError(msg) => TransportError::Server(msg),
        other => TransportError::Server(other.to_string()),
    }
}

/// Signals backing the contact form.
#[derive(Debug, Clone, Copy)]
pub struct ContactFormVm {
    pub state: RwSignal<SubmissionState>,
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub subject: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl Default for ContactFormVm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SubmissionState::Idle),
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    pub fn field(&self, field: ContactField) -> RwSignal<String> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Subject => self.subject,
            ContactField::Message => self.message,
        }
    }
}

impl FormSurface for ContactFormVm {
    fn state(&self) -> SubmissionState {
        self.state.get_untracked()
    }

    fn set_state(&self, state: SubmissionState) {
        self.state.set(state);
    }

    fn fields(&self) -> ContactFields {
        let mut fields = ContactFields::default();
        for field in ContactField::ALL {
            fields.set(field, self.field(field).get_untracked());
        }
        fields
    }

    fn reset(&self) {
        for field in ContactField::ALL {
            self.field(field).set(String::new());
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container);

    let form = ContactFormVm::new();
    let toaster = expect_context::<Toaster>();
    let flow = ContactFlow::new(SiteTransport::from(contact_transport()), toaster);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let flow = flow.clone();
        leptos::task::spawn_local(async move {
            if let SubmitOutcome::Ignored(reason) = flow.submit(&form).await {
                log::debug!("contact submit ignored: {reason:?}");
            }
        });
    };

    let submitting = move || form.state.get().is_submitting();

    let links = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target=link.opens_new_tab().then_some("_blank")
                    rel=link.opens_new_tab().then_some("noopener noreferrer")
                    class="flex items-center gap-4 p-4 glass-card hover:border-primary/30 hover:translate-x-1 transition-all duration-300 group"
                >
                    <div class="p-3 rounded-xl bg-primary/10 text-primary text-xl group-hover:bg-primary group-hover:text-primary-foreground transition-colors">
                        <SvgIcon icon=link.icon() />
                    </div>
                    <div class="flex-grow">
                        <p class="font-medium text-foreground">{link.name}</p>
                        <p class="text-sm text-muted-foreground">{link.label}</p>
                    </div>
                    <span class="text-muted-foreground group-hover:text-primary transition-colors">
                        "↗"
                    </span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Contact.id() class="py-24 md:py-32 relative">
            <div class="section-container" node_ref=container>
                <Reveal revealed=in_view class="text-center mb-16">
                    <span class="text-primary font-medium mb-4 block">"Contact"</span>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-display font-bold mb-6">
                        "Let's Work Together"
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "Have a project in mind or looking for a senior backend developer? I'm always open to discussing new opportunities."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <Reveal
                        revealed=in_view
                        from=RevealFrom::Left
                        delay=Duration::from_millis(200)
                        class="space-y-8"
                    >
                        <div>
                            <h3 class="font-display font-bold text-2xl mb-4">"Get in Touch"</h3>
                            <p class="text-muted-foreground leading-relaxed">
                                "Whether you need a backend architect for a complex project, want to discuss technical challenges, or are looking to hire a senior developer, I'd love to hear from you."
                            </p>
                        </div>
                        <div class="space-y-4">{links}</div>
                        <div class="flex items-center gap-3 text-muted-foreground">
                            <span aria-hidden="true">"📍"</span>
                            <span>"Available for remote work worldwide"</span>
                        </div>
                    </Reveal>

                    <Reveal revealed=in_view from=RevealFrom::Right delay=Duration::from_millis(300)>
                        <form
                            class="glass-card p-6 md:p-8 space-y-6 border-glow"
                            on:submit=on_submit
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <TextField field=ContactField::Name value=form.name />
                                <TextField
                                    field=ContactField::Email
                                    value=form.email
                                    input_type="email"
                                />
                            </div>
                            <TextField field=ContactField::Subject value=form.subject />
                            <div class="space-y-2">
                                <label
                                    for=ContactField::Message.name()
                                    class="text-sm font-medium text-foreground"
                                >
                                    {ContactField::Message.label()}
                                </label>
                                <textarea
                                    id=ContactField::Message.name()
                                    name=ContactField::Message.name()
                                    placeholder=ContactField::Message.placeholder()
                                    rows="5"
                                    required
                                    class="form-input resize-none"
                                    prop:value=move || form.message.get()
                                    on:input=move |ev| form.message.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                class="btn-hero w-full"
                                disabled=submitting
                                aria-busy=move || submitting().to_string()
                            >
                                {move || form.state.get().button_label()}
                                <Show when=move || !submitting()>
                                    <span class="ml-2" aria-hidden="true">"➤"</span>
                                </Show>
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TextField(
    field: ContactField,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=field.name() class="text-sm font-medium text-foreground">
                {field.label()}
            </label>
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=field.placeholder()
                required
                class="form-input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
