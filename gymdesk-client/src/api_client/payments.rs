use super::{handle_response_error, ApiError, AuthClient};
use gymdesk_common::api::{CreatePaymentRequest, InitiatePaymentRequest, InitiatePaymentResponse};
use gymdesk_common::domain::Payment;

impl AuthClient {
    pub async fn payments(&self) -> Result<Vec<Payment>, ApiError> {
        let res = self.client.get(self.url("/payments")).send().await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    /// Record a payment taken at the desk, outside the payment processor.
    pub async fn create_payment(&self, payment: &CreatePaymentRequest) -> Result<Payment, ApiError> {
        let res = self
            .client
            .post(self.url("/payments"))
            .json(payment)
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    /// Open a payment intent with the external processor. The returned
    /// client secret is what the processor's own flow consumes.
    pub async fn initiate_payment(
        &self,
        request: &InitiatePaymentRequest,
    ) -> Result<InitiatePaymentResponse, ApiError> {
        let res = self
            .client
            .post(self.url("/payments/initiate"))
            .json(request)
            .send()
            .await?;
        let res = handle_response_error(res).await?;
        Ok(res.json().await?)
    }

    pub async fn confirm_payment(&self, payment_intent_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/payments/confirm/{}",
            urlencoding::encode(payment_intent_id)
        ));
        let res = self.client.post(url).send().await?;
        handle_response_error(res).await?;
        Ok(())
    }
}
