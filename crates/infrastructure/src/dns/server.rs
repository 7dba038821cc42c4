use dnsf_application::use_cases::{Dispatch, Question, ZoneDispatcher};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

const NO_RECORDS: &[Record] = &[];

/// Serves authoritative answers from the loaded zone.
///
/// Cloning is cheap; every clone shares the same dispatcher and request
/// counter.
#[derive(Clone)]
pub struct DnsServerHandler {
    dispatcher: Arc<ZoneDispatcher>,
}

impl DnsServerHandler {
    pub fn new(dispatcher: Arc<ZoneDispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &ZoneDispatcher {
        &self.dispatcher
    }

    /// Only the first question is answered; the rest are ignored.
    fn first_question(request: &Request) -> Option<Question> {
        request
            .queries()
            .first()
            .map(|query| Question::new(query.original().name().clone(), query.query_type()))
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let question = Self::first_question(request);

        match self.dispatcher.dispatch(question.as_ref()) {
            Dispatch::NoQuestion { request_id } => {
                warn!(request_id, client = %request.src(), "Query without question");
                send_error_response(request, &mut response_handle, ResponseCode::Refused, request_id)
                    .await
            }
            Dispatch::Unrouted { request_id } => {
                send_error_response(request, &mut response_handle, ResponseCode::Refused, request_id)
                    .await
            }
            Dispatch::Answered {
                request_id,
                resolution,
                ..
            } => {
                let builder = MessageResponseBuilder::from_message_request(request);
                let mut header = Header::response_from_request(request.header());
                header.set_authoritative(resolution.authoritative);
                let response = builder.build(
                    header,
                    resolution.answers.iter(),
                    NO_RECORDS.iter(),
                    resolution.authority.iter(),
                    NO_RECORDS.iter(),
                );

                match response_handle.send_response(response).await {
                    Ok(info) => info,
                    Err(e) => {
                        error!(request_id, error = %e, "Failed to send response");
                        ResponseInfo::from(*request.header())
                    }
                }
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
    request_id: u64,
) -> ResponseInfo {
    debug!(request_id, code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(
        header,
        NO_RECORDS.iter(),
        NO_RECORDS.iter(),
        NO_RECORDS.iter(),
        NO_RECORDS.iter(),
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(request_id, error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
