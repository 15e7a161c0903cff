//! gRPC front for the link use case.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::debug;

use crate::application::services::LinkUseCase;
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::rpc::proto::{self, links_server::Links, links_server::LinksServer};

/// Implements `link.Links` on top of a [`LinkUseCase`].
#[derive(Clone)]
pub struct LinksHandler {
    link_service: Arc<dyn LinkUseCase>,
}

impl LinksHandler {
    pub fn new(link_service: Arc<dyn LinkUseCase>) -> Self {
        Self { link_service }
    }

    /// Wraps the handler into a tonic service.
    pub fn into_service(self) -> LinksServer<Self> {
        LinksServer::new(self)
    }
}

#[tonic::async_trait]
impl Links for LinksHandler {
    async fn create_short_link(
        &self,
        request: Request<proto::OriginalLink>,
    ) -> Result<Response<proto::ShortLink>, Status> {
        let proto::OriginalLink { original_link } = request.into_inner();
        debug!(%original_link, "rpc CreateShortLink");

        if original_link.is_empty() {
            return Err(AppError::bad_request("original_link is required").into());
        }

        let mut link = Link::new(original_link);
        self.link_service.create_short_link(&mut link).await?;

        Ok(Response::new(proto::ShortLink {
            short_link: link.short_link,
        }))
    }

    async fn get_original_link(
        &self,
        request: Request<proto::ShortLink>,
    ) -> Result<Response<proto::OriginalLink>, Status> {
        let proto::ShortLink { short_link } = request.into_inner();
        debug!(%short_link, "rpc GetOriginalLink");

        let original_link = self.link_service.get_original_link(&short_link).await?;

        Ok(Response::new(proto::OriginalLink { original_link }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::MockLinkUseCase;
    use tonic::Code;

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock = MockLinkUseCase::new();
        mock.expect_create_short_link()
            .withf(|link| link.original_link == "https://www.golang.org")
            .times(1)
            .returning(|link| {
                link.short_link = "abcdefghij".to_string();
                Ok(())
            });

        let handler = LinksHandler::new(Arc::new(mock));
        let response = handler
            .create_short_link(Request::new(proto::OriginalLink {
                original_link: "https://www.golang.org".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(response.into_inner().short_link, "abcdefghij");
    }

    #[tokio::test]
    async fn test_create_short_link_empty_is_invalid_argument() {
        let mut mock = MockLinkUseCase::new();
        mock.expect_create_short_link().times(0);

        let handler = LinksHandler::new(Arc::new(mock));
        let status = handler
            .create_short_link(Request::new(proto::OriginalLink::default()))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_create_short_link_storage_error_is_internal() {
        let mut mock = MockLinkUseCase::new();
        mock.expect_create_short_link()
            .returning(|_| Err(AppError::storage("database error (table links)", "timeout")));

        let handler = LinksHandler::new(Arc::new(mock));
        let status = handler
            .create_short_link(Request::new(proto::OriginalLink {
                original_link: "https://example.com".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "internal server error");
    }

    #[tokio::test]
    async fn test_get_original_link_success() {
        let mut mock = MockLinkUseCase::new();
        mock.expect_get_original_link()
            .withf(|short| short == "abcdefghij")
            .returning(|_| Ok("https://www.golang.org".to_string()));

        let handler = LinksHandler::new(Arc::new(mock));
        let response = handler
            .get_original_link(Request::new(proto::ShortLink {
                short_link: "abcdefghij".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(response.into_inner().original_link, "https://www.golang.org");
    }

    #[tokio::test]
    async fn test_get_original_link_not_found() {
        let mut mock = MockLinkUseCase::new();
        mock.expect_get_original_link()
            .returning(|_| Err(AppError::not_found()));

        let handler = LinksHandler::new(Arc::new(mock));
        let status = handler
            .get_original_link(Request::new(proto::ShortLink {
                short_link: "missing000".to_string(),
            }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "item is not found");
    }
}
