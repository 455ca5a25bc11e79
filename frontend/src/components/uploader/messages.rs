use common::error::ApiError;
use common::model::upload::SelectedFile;
use common::model::user::User;

pub enum Msg {
    FileChanged(Option<web_sys::File>),
    RemoveFile,
    SubmitFile,
    UploadFinished {
        uploaded: SelectedFile,
        result: Result<(), ApiError>,
    },
    SearchChanged(String),
    RunSearch(u64),
    UsersLoaded {
        id: u64,
        result: Result<Vec<User>, ApiError>,
    },
    CloseWarning,
}
