//! HTTP entry point for the homepage workload.

use std::rc::Rc;

use spin_sdk::http::{
    Fields, IncomingRequest, Method as HttpMethod, OutgoingResponse, ResponseOutparam,
};
use spin_sdk::http_component;

use vitrine_sdk::prelude::*;

use crate::loader;
use crate::stream_home;

#[http_component]
async fn handle_homepage(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != HttpMethod::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let full_path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let path = full_path.split('?').next().unwrap_or("/").to_string();
    let ctx = RequestContext::new(Method::Get, path);
    let request_id = ctx.request_id.clone();

    let logger = StructuredLogger::new(request_id.clone())
        .with_page("homepage")
        .with_route(&ctx.path)
        .with_format(LogFormat::Human);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_page("homepage");
    metrics.set_route(&ctx.path);

    // In production the endpoint and access token come from the host's
    // variable store.
    let config = StorefrontConfig::default();
    let api: Rc<dyn StorefrontApi> = Rc::new(StorefrontClient::new(
        &config.api_url,
        config.locale.clone(),
    ));

    logger.info("Homepage request started");

    let envelope = match loader::load(&ctx, api, &config).await {
        Ok(envelope) => envelope,
        Err(err) => {
            let status = err.status().as_u16();
            logger
                .warn_builder("Homepage load failed")
                .field("error", err.to_string())
                .emit();

            // Locale mismatch and eager-query failures answer with an
            // empty body; nothing has been streamed yet.
            let headers = Fields::from_list(&[]).unwrap();
            let response = OutgoingResponse::new(headers);
            response.set_status_code(status).unwrap();
            response_out.set(response);

            eprintln!("{}", metrics.finalize(Some(status)).to_summary());
            return;
        }
    };

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
        (
            "cache-control".to_owned(),
            "public, max-age=60, stale-while-revalidate=30".into(),
        ),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    metrics.record_shell_sent();
    match stream_home(envelope, &config, &mut sink, &SlotFailurePolicy::Omit).await {
        Ok(summary) => {
            for slot in &summary.streamed {
                metrics.record_slot_sent(&slot.name, Some(slot.bytes), slot.used_fallback);
            }
            for (slot, error) in &summary.failed {
                logger
                    .warn_builder("Slot failed")
                    .field("slot", slot.clone())
                    .field("error", error.clone())
                    .emit();
            }
            logger
                .info_builder("Homepage request complete")
                .field_i64("slots_streamed", summary.streamed.len() as i64)
                .field_i64("slots_failed", summary.failed.len() as i64)
                .emit();

            eprintln!("{}", metrics.finalize(Some(200)).to_summary());
        }
        Err(err) => {
            logger
                .error_builder("Homepage streaming failed")
                .field("error", err.to_string())
                .emit();
        }
    }
}
