use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid option name: option name may not be empty")]
    InvalidOption,

    #[error("Null or empty header provided; could not be formatted.")]
    EmptyHeader,

    #[error("{}\n{}", .message, .additional_details)]
    ProfileNotFound {
        message: String,
        additional_details: String,
    },

    #[error("Settings have already been initialized.")]
    SettingsAlreadyInitialized,

    #[error("Settings have not been initialized yet.")]
    SettingsNotInitialized,

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing placeholder string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("Invalid value `{}`: expected key=value", .0)]
    ValueFormat(String),
}

impl Error {
    pub fn profile_not_found(profile_type: &str) -> Self {
        Self::ProfileNotFound {
            message: format!(
                "Profile of type \"{profile_type}\" does not exist within the loaded profiles for the command and it is marked as required."
            ),
            additional_details: "Extracting option values from profiles for the command.".to_string(),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
