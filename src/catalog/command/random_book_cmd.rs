use async_trait::async_trait;
use crate::catalog::command::get_book_cmd::GetBookCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RandomBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RandomBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[async_trait]
impl Command<(), GetBookCommandResponse> for RandomBookCommand {
    async fn execute(&self, _req: ()) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.random_book()
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
