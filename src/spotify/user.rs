use crate::{
    config,
    error::{ConvertError, SpotifyError},
    spotify::SpotifyClient,
    types::UserProfile,
};

impl SpotifyClient {
    /// Profile of the user the token belongs to.
    pub async fn current_user(&self) -> Result<UserProfile, SpotifyError> {
        Self::send_json::<UserProfile>(self.get("/me")).await
    }

    /// Owner for the new playlist: `SPOTIFY_USER_ID` if set, otherwise the token's user.
    pub async fn resolve_owner(&self) -> Result<UserProfile, ConvertError> {
        if let Some(id) = config::spotify_user() {
            return Ok(UserProfile {
                id,
                display_name: None,
            });
        }

        self.current_user().await.map_err(ConvertError::UserInfo)
    }
}
