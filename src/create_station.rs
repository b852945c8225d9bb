use crate::{Error, Gateway, Session, StationDraft};

impl Gateway {
    /// Submits a new station. There is no idempotency key: submitting the same draft twice
    /// creates two records.
    pub async fn create_station(
        &self,
        session: &Session,
        draft: &StationDraft,
    ) -> Result<(), Error> {
        let url = self.url("/api/postos");
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .json(draft);
        let (status, text) = self.send(request).await?;
        crate::check_status(status, text)?;

        log::info!("created station \"{}\"", draft.name);
        Ok(())
    }
}
