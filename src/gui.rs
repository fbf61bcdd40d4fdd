use crate::{
    config::AppConfig,
    shell::{ConverterShell, NoticeKind},
};
use native_windows_derive::NwgUi;
use native_windows_gui::{
    modal_error_message, modal_info_message, stop_thread_dispatch, Button, FileDialog, Font,
    GridLayout, Label, ListBox, NativeUi, Window,
};
#[allow(unused_imports)]
use native_windows_gui::FileDialogAction;
use std::{cell::RefCell, path::PathBuf};

#[derive(NwgUi)]
pub struct MainGui {
    #[nwg_control(size: data.config.size, title: data.config.title)]
    #[nwg_events(OnWindowClose: [MainGui::exit], OnInit: [MainGui::initialise])]
    window: Window,

    #[nwg_layout(parent: window, max_row: Some(3), max_column: Some(2))]
    main_layout: GridLayout,

    #[nwg_resource(
        title: data.config.dialog_title,
        action: FileDialogAction::Open,
        filters: data.config.filters,
    )]
    file_dialog: FileDialog,

    #[nwg_control(text: "Choose file")]
    #[nwg_layout_item(layout: main_layout, col: 0, row: 0)]
    file_label: Label,

    #[nwg_control(text: "File Type")]
    #[nwg_layout_item(layout: main_layout, col: 1, row: 0)]
    type_label: Label,

    #[nwg_control(text: "Browse Files", focus: true)]
    #[nwg_layout_item(layout: main_layout, col: 0, row: 1)]
    #[nwg_events(OnButtonClick: [MainGui::browse_files])]
    browse_btn: Button,

    #[nwg_control(
        collection: data.config.format_labels(),
        selected_index: Some(data.config.default_format),
    )]
    #[nwg_layout_item(layout: main_layout, col: 1, row: 1)]
    type_list: ListBox<String>,

    #[nwg_control(text: "Convert")]
    #[nwg_layout_item(layout: main_layout, col: 1, row: 2)]
    #[nwg_events(OnButtonClick: [MainGui::convert])]
    convert_btn: Button,

    config: AppConfig,
    shell: RefCell<ConverterShell>,
}

impl MainGui {
    fn initialise(&self) {
        if let Err(err) = self.file_dialog.set_default_folder(&self.config.initial_dir) {
            log::warn!("couldn't set default folder for file dialog: {err}");
        }
    }

    fn browse_files(&self) {
        let path = if self.file_dialog.run(Some(&self.window)) {
            self.file_dialog.get_selected_item().ok().map(PathBuf::from)
        } else {
            None
        };

        let mut shell = self.shell.borrow_mut();
        shell.choose_file(path);
        if let Some(path) = shell.path() {
            log::info!("selected {}", path.display());
        }
        self.file_label.set_text(&shell.file_label());
    }

    fn convert(&self) {
        let mut shell = self.shell.borrow_mut();
        shell.select_type(self.type_list.selection());

        let outcome = shell.convert();
        log::debug!("converter is {:?} after {outcome:?}", shell.state());
        match outcome.kind() {
            NoticeKind::Error => {
                modal_error_message(&self.window, self.config.title, outcome.message());
            }
            NoticeKind::Info => {
                modal_info_message(&self.window, self.config.title, outcome.message());
            }
        }
    }

    fn exit(&self) {
        stop_thread_dispatch();
    }
}

pub fn create_gui(config: AppConfig) -> eyre::Result<()> {
    native_windows_gui::init()?;
    Font::set_global_family("Segoe UI")?;

    let app = MainGui {
        window: Window::default(),
        main_layout: GridLayout::default(),
        file_dialog: FileDialog::default(),
        file_label: Label::default(),
        type_label: Label::default(),
        browse_btn: Button::default(),
        type_list: ListBox::default(),
        convert_btn: Button::default(),
        shell: RefCell::new(ConverterShell::new(&config)),
        config,
    };
    let _ui = MainGui::build_ui(app)?;

    native_windows_gui::dispatch_thread_events();

    Ok(())
}
