//! Prompt composition for case study generation.

use crate::error::ServiceError;
use crate::types::CaseStudyBrief;

/// Fixed system instruction sent with every generation attempt. Retries
/// re-send it verbatim; the re-roll is blind, not corrective.
pub(crate) const SYSTEM_INSTRUCTION: &str = r#"You are a service that generates case studies for prospective clients. You have been given content that you need to format into a case study.
The content you have been given is in the following format:
{
  "title": "Case Study Title",
  "client": "Client Name",
  "industry": "Industry",
  "services": ["Service 1", "Service 2", "Service 3"],
  "input": "Some input content",
  "results": {
    "impressions": 1000000,
    "clicks": 50000,
    "conversions": 500
  }
}

You need to format this content into a case study that looks like this (JSON format):
{
    "title": "Case Study Title",
    "description": "Some description of the case study",
    "content": "Markdown content that describes the case study",
}

The content should be in markdown format and should include the following information:
Challenges: A description of the challenges the client was facing
Solution: A description of the solution that was provided
Results: A description of the results that were achieved
Technologies: A list of technologies that were used in the project <TagList tags={["Technology 1", "Technology 2", "Technology 3"]} />
Blockquote: <Blockquote text="Some quote from the client" author="Client Name" />

Do not include the title in the content, as it will be added automatically.
The language used in the case study should be professional and should highlight the success of the project.
The language (German, English, French) of the case study should be based on the language of the input content."#;

/// Serialize the brief as the user payload for one model call.
pub(crate) fn user_payload(brief: &CaseStudyBrief) -> Result<String, ServiceError> {
    serde_json::to_string(brief).map_err(ServiceError::from)
}
