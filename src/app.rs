use crate::components::drop_target::drop_target;
use crate::components::segmented_toggle::{side_panel_toggle, SidePanel};
use crate::config::ClientConfig;
use crate::message::{Message, Workflow};
use crate::model::{FileHandle, PanelContent, ReportHandle};
use crate::services::{Backend, HttpBackend};
use crate::views::{metadata_panel, preview_panels, results_panel, status_line, study_panel};
use crate::workflow::process::process_recent;
use crate::workflow::report::save_report;
use crate::workflow::studies::{refresh_studies, submit_study};
use crate::workflow::upload::submit_files;
use crate::workflow::present::settle_preview;
use crate::workflow::{DropZone, Ingest, IngestEvent, Render, Screen, ScreenUpdate, StatusLine};
use iced::futures::channel::mpsc;
use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable};
use iced::{application, event, window, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

const APP_TITLE: &str = "Mirai";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = ClientConfig::load();
    let backend = HttpBackend::new(&config).map(Arc::new).map_err(|err| {
        log::error!("Cannot set up the HTTP client: {err}");
        err.to_string()
    });

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .run_with(move || App::new(config, backend))
}

/// Forwards updates from a running workflow to the GUI.
struct ScreenFeed(mpsc::UnboundedSender<ScreenUpdate>);

impl Render for ScreenFeed {
    fn render(&mut self, update: ScreenUpdate) {
        if self.0.unbounded_send(update).is_err() {
            log::debug!("Screen update dropped, the window is gone");
        }
    }
}

/// Runs `work` with a [`ScreenFeed`] and streams its updates back as
/// [`Message::Screen`] while it runs.
fn spawn_workflow<F, Fut>(kind: Workflow, work: F) -> Task<Message>
where
    F: FnOnce(ScreenFeed) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (sender, receiver) = mpsc::unbounded();
    let work = work(ScreenFeed(sender));

    Task::batch([
        Task::run(receiver, Message::Screen),
        Task::perform(work, move |()| Message::WorkflowFinished(kind)),
    ])
}

pub struct App {
    config: ClientConfig,
    backend: Result<Arc<HttpBackend>, String>,
    screen: Screen,
    drop_zone: DropZone,
    panel_generation: u64,
    preview_images: BTreeMap<usize, Handle>,
    side_panel: SidePanel,
}

impl App {
    fn new(
        config: ClientConfig,
        backend: Result<Arc<HttpBackend>, String>,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            config,
            backend,
            screen: Screen::default(),
            drop_zone: DropZone::default(),
            panel_generation: 0,
            preview_images: BTreeMap::new(),
            side_panel: SidePanel::default(),
        };
        let initial = app.refresh_studies();
        (app, initial)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFiles => Task::perform(
                async {
                    AsyncFileDialog::new().pick_files().await.map(|handles| {
                        handles
                            .into_iter()
                            .map(|handle| handle.path().to_path_buf())
                            .collect()
                    })
                },
                Message::FilesPicked,
            ),
            Message::FilesPicked(Some(paths)) if !paths.is_empty() => {
                self.update(Message::Ingest(IngestEvent::Picked(paths)))
            }
            Message::FilesPicked(_) => Task::none(),
            Message::Ingest(event) => match self.drop_zone.handle(event, &mut self.screen) {
                Ingest::Nothing => Task::none(),
                Ingest::Settling(sequence) => {
                    log::debug!("{} dropped file(s) waiting", self.drop_zone.pending());
                    let settle = self.config.drop_settle();
                    Task::perform(tokio::time::sleep(settle), move |()| {
                        Message::Ingest(IngestEvent::Settled(sequence))
                    })
                }
                Ingest::Batch(files) => self.upload(files),
            },
            Message::ProcessRecent => {
                let Some(backend) = self.backend() else {
                    return Task::none();
                };
                spawn_workflow(Workflow::ProcessRecent, move |mut feed| async move {
                    process_recent(backend.as_ref(), &mut feed).await;
                })
            }
            Message::Screen(update) => self.apply_screen_update(update),
            Message::WorkflowFinished(kind) => {
                log::debug!("{kind:?} finished");
                Task::none()
            }
            Message::PreviewLoaded {
                generation,
                index,
                image,
            } => {
                if let Some(handle) = settle_preview(
                    &mut self.screen,
                    self.panel_generation,
                    generation,
                    index,
                    image,
                ) {
                    self.preview_images.insert(index, handle);
                }
                Task::none()
            }
            Message::PickStudyPdf(slot) => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("PDF", &["pdf"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |path| Message::StudyPdfPicked(slot, path),
            ),
            Message::StudyPdfPicked(slot, Some(path)) => {
                self.screen.apply(ScreenUpdate::StudyFile {
                    slot,
                    file: Some(FileHandle::from_path(path)),
                });
                Task::none()
            }
            Message::StudyPdfPicked(_, None) => Task::none(),
            Message::SubmitStudy => {
                let Some(backend) = self.backend() else {
                    return Task::none();
                };
                let form = self.screen.study_form.clone();
                spawn_workflow(Workflow::StudyUpload, move |mut feed| async move {
                    submit_study(backend.as_ref(), &mut feed, form).await;
                })
            }
            Message::RefreshStudies => self.refresh_studies(),
            Message::SaveReport => match &self.screen.report {
                Some(report) => {
                    let suggested = report.file_name().to_string();
                    Task::perform(
                        async move {
                            AsyncFileDialog::new()
                                .set_file_name(suggested)
                                .add_filter("PDF", &["pdf"])
                                .save_file()
                                .await
                                .map(|handle| handle.path().to_path_buf())
                        },
                        Message::ReportTargetChosen,
                    )
                }
                None => Task::none(),
            },
            Message::ReportTargetChosen(Some(target)) => match self.screen.report.clone() {
                Some(report) => self.download_report(report, target),
                None => Task::none(),
            },
            Message::ReportTargetChosen(None) => Task::none(),
            Message::SelectSidePanel(panel) => {
                self.side_panel = panel;
                Task::none()
            }
        }
    }

    /// The HTTP client, or `None` after putting its setup error on the
    /// status line.
    fn backend(&mut self) -> Option<Arc<HttpBackend>> {
        match &self.backend {
            Ok(backend) => Some(Arc::clone(backend)),
            Err(err) => {
                self.screen.apply(ScreenUpdate::Status(StatusLine::failure(format!(
                    "HTTP client unavailable: {err}"
                ))));
                None
            }
        }
    }

    fn upload(&mut self, files: Vec<FileHandle>) -> Task<Message> {
        let Some(backend) = self.backend() else {
            return Task::none();
        };
        spawn_workflow(Workflow::Upload, move |mut feed| async move {
            submit_files(backend.as_ref(), &mut feed, files).await;
        })
    }

    fn refresh_studies(&mut self) -> Task<Message> {
        let Some(backend) = self.backend() else {
            return Task::none();
        };
        spawn_workflow(Workflow::StudyListing, move |mut feed| async move {
            refresh_studies(backend.as_ref(), &mut feed).await;
        })
    }

    fn download_report(&mut self, report: ReportHandle, target: PathBuf) -> Task<Message> {
        let Some(backend) = self.backend() else {
            return Task::none();
        };
        spawn_workflow(Workflow::ReportDownload, move |mut feed| async move {
            save_report(backend.as_ref(), &mut feed, &report, &target).await;
        })
    }

    fn apply_screen_update(&mut self, update: ScreenUpdate) -> Task<Message> {
        let task = match &update {
            ScreenUpdate::ClearPanels => {
                self.panel_generation += 1;
                self.preview_images.clear();
                Task::none()
            }
            ScreenUpdate::Panel {
                index,
                content: PanelContent::Image { location, .. },
            } => self.fetch_preview(*index, location.clone()),
            _ => Task::none(),
        };
        self.screen.apply(update);
        task
    }

    fn fetch_preview(&mut self, index: usize, location: String) -> Task<Message> {
        let Some(backend) = self.backend() else {
            return Task::none();
        };
        let generation = self.panel_generation;
        Task::perform(
            async move {
                backend
                    .fetch_bytes(&location)
                    .await
                    .map(Handle::from_bytes)
                    .map_err(|err| err.to_string())
            },
            move |image| Message::PreviewLoaded {
                generation,
                index,
                image,
            },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let left = column![
            drop_target(self.screen.highlighted),
            status_line(&self.screen.status),
            preview_panels(&self.screen.panels, &self.preview_images),
        ]
        .spacing(12)
        .width(Length::FillPortion(3));

        let middle = container(scrollable(metadata_panel(&self.screen.metadata)))
            .padding(8)
            .width(Length::FillPortion(2))
            .height(Length::Fill)
            .style(container::bordered_box);

        let side: Element<'_, Message> = match self.side_panel {
            SidePanel::Results => {
                results_panel(&self.screen.results, self.screen.report.as_ref())
            }
            SidePanel::Studies => study_panel(
                &self.screen.study_form,
                &self.screen.study_status,
                &self.screen.studies,
            ),
        };
        let right = column![side_panel_toggle(self.side_panel), side]
            .spacing(12)
            .width(Length::FillPortion(2));

        container(row![left, middle, right].spacing(16))
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(file_drag_event)
    }
}

fn file_drag_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => {
            Some(Message::Ingest(IngestEvent::Hovered))
        }
        Event::Window(window::Event::FilesHoveredLeft) => {
            Some(Message::Ingest(IngestEvent::HoverLeft))
        }
        Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::Ingest(IngestEvent::Dropped(path)))
        }
        _ => None,
    }
}
