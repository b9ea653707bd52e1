mod common;

use common::ScriptedBackend;
use foliogen::{
    AppContext, AppError, GenerationParameters, NoopPacer, PipelineRequest, execute,
};

fn ctx(backend: &ScriptedBackend) -> AppContext<ScriptedBackend, NoopPacer> {
    AppContext::new(backend.clone(), NoopPacer, "test-model")
}

fn named_params() -> GenerationParameters {
    GenerationParameters {
        user_name: "Ada".to_string(),
        title: "Engineer".to_string(),
        ..Default::default()
    }
}

#[test]
fn landing_run_assembles_all_fragments_under_the_skeleton() {
    let backend = ScriptedBackend::new();
    backend.push_text("import React from 'react';");
    backend.push_text("<header>Hero</header>");
    backend.push_text("<section>Body</section>");

    let request = PipelineRequest {
        params: named_params(),
        pipeline: Some("landing".to_string()),
        refine: Some(false),
    };
    let output = execute(&ctx(&backend), request).unwrap();

    assert_eq!(backend.call_count(), 3);
    assert_eq!(output.portfolio_code.len(), 3);
    assert!(output.complete_code.starts_with("import React from 'react';"));
    // Parameters land in the skeleton slots, not inside fragments.
    assert!(output.complete_code.contains("// Landing page for Ada, Engineer"));
    assert!(output.complete_code.contains("<header>Hero</header>"));
    assert!(output.complete_code.contains("<section>Body</section>"));
    assert_eq!(output.token_track.len(), 3);
}

#[test]
fn portfolio_is_the_default_pipeline() {
    let backend = ScriptedBackend::new();

    let output = execute(&ctx(&backend), PipelineRequest::default()).unwrap();

    // Nine sections, no refinement by default.
    assert_eq!(backend.call_count(), 9);
    assert_eq!(output.portfolio_code.len(), 9);
    assert!(output.complete_code.contains("export default function Portfolio() {"));
}

#[test]
fn landing_refines_by_default_and_tracks_the_extra_call() {
    let backend = ScriptedBackend::new();
    backend.push_text("import React from 'react';");
    backend.push_text("<header>Hero</header>");
    backend.push_text("<section>Body</section>");
    backend.push_text("```jsx\nconst refined = true;\n```");

    let request = PipelineRequest {
        params: named_params(),
        pipeline: Some("landing".to_string()),
        refine: None,
    };
    let output = execute(&ctx(&backend), request).unwrap();

    assert_eq!(backend.call_count(), 4);
    assert_eq!(output.complete_code, "const refined = true;");
    assert_eq!(output.token_track.len(), 4);

    // The refinement call carries the assembled document and the cleanup
    // system instruction; the section calls carry neither.
    let requests = backend.requests();
    assert!(requests[..3].iter().all(|r| r.system.is_none()));
    assert!(requests[3].system.is_some());
    assert!(requests[3].prompt.contains("<header>Hero</header>"));
}

#[test]
fn refinement_failure_is_the_flow_failure() {
    let backend = ScriptedBackend::new();
    backend.push_text("import React from 'react';");
    backend.push_text("<header>Hero</header>");
    backend.push_text("<section>Body</section>");
    backend.push_failure("refinement refused", 500);

    let request = PipelineRequest {
        params: named_params(),
        pipeline: Some("landing".to_string()),
        refine: None,
    };
    let err = execute(&ctx(&backend), request).unwrap_err();

    assert_eq!(err.to_string(), "refinement refused");
}

#[test]
fn backend_failure_mid_run_aborts_without_partial_output() {
    let backend = ScriptedBackend::new();
    backend.push_text("import React from 'react';");
    backend.push_failure("The model is overloaded", 529);

    let request = PipelineRequest {
        params: named_params(),
        pipeline: Some("landing".to_string()),
        refine: Some(false),
    };
    let err = execute(&ctx(&backend), request).unwrap_err();

    // One success, one failure, nothing after the abort.
    assert_eq!(backend.call_count(), 2);
    match err {
        AppError::Backend { message, status } => {
            assert_eq!(message, "The model is overloaded");
            assert_eq!(status, Some(529));
        }
        other => panic!("unexpected error variant: {}", other),
    }
}

#[test]
fn section_prompts_embed_the_request_parameters() {
    let backend = ScriptedBackend::new();

    let request = PipelineRequest {
        params: GenerationParameters {
            user_name: "Grace Hopper".to_string(),
            technology: "Next.js".to_string(),
            ..Default::default()
        },
        pipeline: Some("landing".to_string()),
        refine: Some(false),
    };
    execute(&ctx(&backend), request).unwrap();

    let requests = backend.requests();
    assert!(requests.iter().any(|r| r.prompt.contains("Grace Hopper")));
    assert!(requests.iter().all(|r| !r.prompt.contains("{{")));
    assert!(requests[0].prompt.contains("Next.js"));
}
