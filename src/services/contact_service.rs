use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Contact,
        dto::{
            request::{CreateContactRequest, UpdateContactRequest},
            response::{ContactDto, DeleteManyResponse, MessageResponse},
        },
    },
    repositories::ContactRepository,
    services::parse_object_id,
};

pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ContactDto>> {
        let contacts = self.repository.find_all().await?;
        Ok(contacts.into_iter().map(ContactDto::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<ContactDto> {
        let oid = parse_object_id(id, "Contact")?;
        let contact = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;
        Ok(contact.into())
    }

    pub async fn create(&self, request: CreateContactRequest) -> AppResult<ContactDto> {
        request.validate()?;

        let contact = Contact {
            id: None,
            firstname: request.firstname.unwrap_or_default().trim().to_string(),
            lastname: request.lastname.unwrap_or_default().trim().to_string(),
            email: request.email,
        };

        let created = self.repository.create(contact).await?;
        Ok(created.into())
    }

    pub async fn update(&self, id: &str, request: UpdateContactRequest) -> AppResult<ContactDto> {
        request.validate()?;

        let oid = parse_object_id(id, "Contact")?;
        let mut contact = self
            .repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound("Contact not found".to_string()))?;

        if let Some(firstname) = request.firstname {
            contact.firstname = firstname.trim().to_string();
        }
        if let Some(lastname) = request.lastname {
            contact.lastname = lastname.trim().to_string();
        }
        if request.email.is_some() {
            contact.email = request.email;
        }

        let updated = self.repository.update(oid, contact).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let oid = parse_object_id(id, "Contact")?;
        self.repository.delete(oid).await?;
        Ok(MessageResponse {
            message: "Contact deleted".to_string(),
        })
    }

    pub async fn delete_many(&self) -> AppResult<DeleteManyResponse> {
        let deleted_count = self.repository.delete_many().await?;
        Ok(DeleteManyResponse::new(deleted_count, "contacts"))
    }
}
