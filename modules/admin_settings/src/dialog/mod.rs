//! Editing dialogs for individual settings

pub mod error;
pub mod external_program_link;

pub use error::DialogError;
pub use external_program_link::{
    CloseReason, DialogState, ExternalProgramLinkDialog, ExternalProgramsDraft,
};
