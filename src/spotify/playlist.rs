use async_trait::async_trait;

use crate::{
    catalog::PlaylistApi,
    error::SpotifyError,
    spotify::SpotifyClient,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse},
};

#[async_trait]
impl PlaylistApi for SpotifyClient {
    async fn create_playlist(
        &self,
        owner_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<String, SpotifyError> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };

        let request = self
            .post(&format!("/users/{}/playlists", owner_id))
            .json(&body);
        let playlist = Self::send_json::<CreatePlaylistResponse>(request).await?;

        if playlist.id.is_empty() {
            return Err(SpotifyError::Rejected(
                "playlist created without an id".to_string(),
            ));
        }
        Ok(playlist.id)
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), SpotifyError> {
        let body = AddTracksRequest {
            uris: uris.to_vec(),
        };

        let request = self
            .post(&format!("/playlists/{}/tracks", playlist_id))
            .json(&body);
        Self::send_json::<AddTracksResponse>(request).await?;
        Ok(())
    }
}
