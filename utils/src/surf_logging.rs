use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response};

/// Middleware that logs every outgoing request and its response status.
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(
        &self,
        req: Request,
        client: Client,
        next: Next<'_>,
    ) -> surf::Result<Response> {
        let method = req.method();
        let url = req.url().clone();
        log::debug!("{} {}", method, url);

        let response = next.run(req, client).await?;

        log::debug!("{} {} -> {}", method, url, response.status());
        Ok(response)
    }
}
