use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::errors::ItemError;
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::item::value_objects::ItemId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemResponse, UpdateItemRequest};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Item catalog API
#[OpenApi]
impl ItemApi {
    /// Get an item by ID
    ///
    /// Returns the current state of a single catalog item.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> GetItemResponse {
        let id = match ItemId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        match self
            .get_by_id_use_case
            .execute(GetItemByIdParams { id })
            .await
        {
            Ok(item) => GetItemResponse::Ok(Json(item.into())),
            Err(err) => err.into(),
        }
    }

    /// Partially update an item
    ///
    /// Only the fields present in the body are changed. At least one of
    /// `name`, `brand` or `purchase_price` must be provided. The response
    /// always carries the full item.
    ///
    /// The body is a JSON object with any of `name` (string), `brand`
    /// (string) and `purchase_price` (integer). It is read only after the
    /// item ID has been accepted.
    #[oai(path = "/items/:id", method = "patch", tag = "ApiTags::Items")]
    async fn update_item(&self, id: Path<String>, body: Body) -> UpdateItemResponse {
        let id = match ItemId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        let request = match read_update_request(body).await {
            Ok(request) => request,
            Err(response) => return response,
        };

        let params = UpdateItemParams {
            id,
            patch: request.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => err.into(),
        }
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> DeleteItemResponse {
        let id = match ItemId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        match self.delete_use_case.execute(DeleteItemParams { id }).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => err.into(),
        }
    }
}

async fn read_update_request(body: Body) -> Result<UpdateItemRequest, UpdateItemResponse> {
    let bytes = body
        .into_vec()
        .await
        .map_err(|err| invalid_update_body(&err))?;

    UpdateItemRequest::from_json_slice(&bytes).map_err(|err| invalid_update_body(&err))
}

fn invalid_update_body(err: &dyn std::fmt::Display) -> UpdateItemResponse {
    tracing::debug!(error = %err, "rejected malformed item update body");
    UpdateItemResponse::BadRequest(Json(ErrorResponse::invalid_request_format()))
}

fn malformed_get_request(err: poem::Error) -> GetItemResponse {
    tracing::debug!(error = %err, "rejected malformed item request");
    GetItemResponse::BadRequest(Json(ErrorResponse::invalid_request_format()))
}

fn malformed_update_request(err: poem::Error) -> UpdateItemResponse {
    invalid_update_body(&err)
}

fn malformed_delete_request(err: poem::Error) -> DeleteItemResponse {
    tracing::debug!(error = %err, "rejected malformed item delete request");
    DeleteItemResponse::BadRequest(Json(ErrorResponse::invalid_request_format()))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "malformed_get_request")]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ItemError> for GetItemResponse {
    fn from(err: ItemError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => GetItemResponse::BadRequest(json),
            404 => GetItemResponse::NotFound(json),
            _ => GetItemResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "malformed_update_request")]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ItemError> for UpdateItemResponse {
    fn from(err: ItemError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => UpdateItemResponse::BadRequest(json),
            404 => UpdateItemResponse::NotFound(json),
            _ => UpdateItemResponse::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "malformed_delete_request")]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<ItemError> for DeleteItemResponse {
    fn from(err: ItemError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => DeleteItemResponse::BadRequest(json),
            404 => DeleteItemResponse::NotFound(json),
            _ => DeleteItemResponse::InternalError(json),
        }
    }
}
