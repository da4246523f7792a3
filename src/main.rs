use iced::{Element, Task, Theme};
use iced::widget::{button, column, container, text, text_input, Column};
use iced::{Alignment, Length};
use std::sync::Arc;

// Declare the crate modules
mod api;
mod config;
mod state;

use api::client::{ApiError, HttpShiftClient, ShiftApi};
use api::types::ShiftRecord;
use config::Config;
use state::cache::{QueryCache, SHIFTS_TAG};
use state::form::ShiftForm;

/// Where the current submission is in its lifecycle
///
/// The guard against double submission: while a request is on the wire the
/// submit control is disabled and extra presses are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    /// No request outstanding
    Idle,
    /// A create request is on the wire
    InFlight,
    /// The last submission was acknowledged by the server
    Succeeded,
    /// The last submission failed
    Failed,
}

/// Main application state
struct ShiftDesk {
    /// The shift draft currently being edited
    form: ShiftForm,
    /// Submission lifecycle of the form
    submit: SubmitState,
    /// The create-endpoint collaborator
    api: Arc<dyn ShiftApi>,
    /// Query cache invalidated when a shift is created
    cache: Arc<QueryCache>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the start time field
    StartTimeChanged(String),
    /// User edited the end time field
    EndTimeChanged(String),
    /// User edited the type field
    TypeChanged(String),
    /// User clicked the "Create Shift" button
    SubmitPressed,
    /// Background create request completed
    SubmitFinished(Result<ShiftRecord, ApiError>),
}

impl ShiftDesk {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        println!("🗓️  Shift Desk pointed at {}", config.api_base_url);

        let api = Arc::new(HttpShiftClient::new(config.api_base_url));
        let cache = Arc::new(QueryCache::new());

        (ShiftDesk::with_collaborators(api, cache), Task::none())
    }

    /// Build the application around injected collaborators
    fn with_collaborators(api: Arc<dyn ShiftApi>, cache: Arc<QueryCache>) -> Self {
        ShiftDesk {
            form: ShiftForm::default(),
            submit: SubmitState::Idle,
            api,
            cache,
            status: String::from("Ready."),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StartTimeChanged(value) => {
                self.form.start_time = value;
                self.rearm();
                Task::none()
            }
            Message::EndTimeChanged(value) => {
                self.form.end_time = value;
                self.rearm();
                Task::none()
            }
            Message::TypeChanged(value) => {
                self.form.shift_type = value;
                self.rearm();
                Task::none()
            }
            Message::SubmitPressed => {
                // A request is already on the wire; ignore the extra press
                if self.submit == SubmitState::InFlight {
                    return Task::none();
                }

                match self.form.to_request() {
                    Ok(request) => {
                        self.submit = SubmitState::InFlight;
                        self.status = String::from("Creating shift...");

                        Task::perform(self.api.create_shift(request), Message::SubmitFinished)
                    }
                    Err(error) => {
                        // Rejected locally; nothing is sent
                        self.status = format!("⚠️  {error}");
                        Task::none()
                    }
                }
            }
            Message::SubmitFinished(Ok(record)) => {
                self.submit = SubmitState::Succeeded;

                // The cached shifts collection is now out of date
                self.cache.invalidate(SHIFTS_TAG);
                self.form.clear();

                self.status = format!("✅ Shift #{} created.", record.id);
                println!("✅ Created shift #{} ({})", record.id, record.shift_type);

                Task::none()
            }
            Message::SubmitFinished(Err(error)) => {
                self.submit = SubmitState::Failed;

                // Log and keep the draft so the user can retry
                eprintln!("⚠️  Shift creation failed: {error}");
                self.status = format!("⚠️  Could not create shift: {error}");

                Task::none()
            }
        }
    }

    /// Any edit after a finished submission re-arms the form
    fn rearm(&mut self) {
        if self.submit != SubmitState::InFlight {
            self.submit = SubmitState::Idle;
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let submitting = self.submit == SubmitState::InFlight;

        let submit_button = if submitting {
            button("Creating...").padding(10)
        } else {
            button("Create Shift")
                .on_press(Message::SubmitPressed)
                .padding(10)
        };

        let content: Column<Message> = column![
            text("Create New Shift").size(32),
            field(
                "Start Time",
                "YYYY-MM-DDTHH:MM",
                &self.form.start_time,
                Message::StartTimeChanged,
            ),
            field(
                "End Time",
                "YYYY-MM-DDTHH:MM",
                &self.form.end_time,
                Message::EndTimeChanged,
            ),
            field("Type", "Type", &self.form.shift_type, Message::TypeChanged),
            submit_button,
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// A labelled text input for one form field
fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Column<'a, Message> {
    column![
        text(label).size(14),
        text_input(placeholder, value).on_input(on_input).padding(10),
    ]
    .spacing(4)
}

fn main() -> iced::Result {
    iced::application(
        "Shift Desk",
        ShiftDesk::update,
        ShiftDesk::view,
    )
    .theme(ShiftDesk::theme)
    .centered()
    .run_with(ShiftDesk::new)
}
