//! Local preview decoding. No network involved.

use web_sys::File;

use crate::{AppError, AppResult};

/// Read `file` into a `data:` URL usable as an `<img>`/`<video>` source.
pub async fn read_data_url(file: &File) -> AppResult<String> {
    let file = gloo_file::File::from(file.clone());
    gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| AppError::Preview(e.to_string()))
}
