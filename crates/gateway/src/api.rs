//! One function per backend endpoint.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use shared_types::{
    AppError, FormId, FormSchema, LoginRequest, Submission, SubmissionPayload, User,
};

use crate::client::{error_for_status, expect_status, read_json, ApiClient};

#[tracing::instrument(skip(client))]
pub async fn list_forms(client: &ApiClient) -> Result<Vec<FormSchema>, AppError> {
    let response = client.send(client.request(Method::GET, "api/forms/")?).await?;
    read_json(response).await
}

/// Fetch one form. A 404 resolves to `None`.
#[tracing::instrument(skip(client))]
pub async fn get_form(client: &ApiClient, id: FormId) -> Result<Option<FormSchema>, AppError> {
    let request = client.request(Method::GET, &format!("api/forms/{id}/"))?;
    let response = client.execute(request).await?;
    if response.status() == StatusCode::NOT_FOUND {
        tracing::info!(form_id = id, "form not found");
        return Ok(None);
    }
    let response = error_for_status(response).await?;
    read_json(response).await.map(Some)
}

/// Create a form. Anything but 201 Created is a failure.
///
/// Returns the stored form when the backend echoes it back, otherwise the
/// schema that was sent.
#[tracing::instrument(skip(client, schema), fields(name = %schema.name, fields = schema.fields.len()))]
pub async fn create_form(client: &ApiClient, schema: &FormSchema) -> Result<FormSchema, AppError> {
    let request = client.request(Method::POST, "api/forms/create/")?.json(schema);
    let response = client.send(request).await?;
    expect_status(&response, StatusCode::CREATED)?;
    let body = response.text().await.unwrap_or_default();
    let created = serde_json::from_str::<FormSchema>(&body).unwrap_or_else(|_| schema.clone());
    tracing::info!(form_id = ?created.id, "form created");
    Ok(created)
}

/// Delete a form. Anything but 204 No Content is a failure.
#[tracing::instrument(skip(client))]
pub async fn delete_form(client: &ApiClient, id: FormId) -> Result<(), AppError> {
    let request = client.request(Method::DELETE, &format!("api/forms/{id}/delete/"))?;
    let response = client.send(request).await?;
    expect_status(&response, StatusCode::NO_CONTENT)?;
    tracing::info!(form_id = id, "form deleted");
    Ok(())
}

/// Post a filled form as multipart: `form`, `data`, and one `files` part
/// per selected file.
#[tracing::instrument(skip(client, payload), fields(form_id = payload.form_id, files = payload.files.len()))]
pub async fn submit_form(client: &ApiClient, payload: &SubmissionPayload) -> Result<(), AppError> {
    let request = client
        .request(Method::POST, "api/forms/submit/")?
        .multipart(multipart_form(payload)?);
    client.send(request).await?;
    tracing::info!("submission accepted");
    Ok(())
}

fn multipart_form(payload: &SubmissionPayload) -> Result<Form, AppError> {
    let mut form = Form::new()
        .text("form", payload.form_id.to_string())
        .text("data", payload.data.clone());
    for file in &payload.files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                AppError::bad_request(format!("Invalid content type for {}: {e}", file.name))
            })?;
        form = form.part("files", part);
    }
    Ok(form)
}

#[tracing::instrument(skip(client))]
pub async fn list_submissions(client: &ApiClient) -> Result<Vec<Submission>, AppError> {
    let response = client.send(client.request(Method::GET, "api/submissions/")?).await?;
    read_json(response).await
}

/// Start a session. The backend answers with a session cookie.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<(), AppError> {
    let request = client.request(Method::POST, "api/auth/login/")?.json(credentials);
    client.send(request).await?;
    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<(), AppError> {
    client.send(client.request(Method::POST, "api/auth/logout/")?).await?;
    Ok(())
}

/// The user the current session belongs to.
#[tracing::instrument(skip(client))]
pub async fn current_user(client: &ApiClient) -> Result<User, AppError> {
    let response = client.send(client.request(Method::GET, "api/user/")?).await?;
    read_json(response).await
}
