// Endpoint registry: tool name -> HTTP method, path template and parameter bindings

use crate::error::RegistryError;
use crate::types::{
    ApiCall, BodyBinding, EndpointDescriptor, HttpMethod, ParamKind, ParamLocation, ParamSpec,
};
use serde_json::{Map, Value};

const LIMIT: ParamSpec = ParamSpec::query(
    "limit",
    ParamKind::Integer,
    "Maximum number of items to return",
);
const NEXT_TOKEN: ParamSpec = ParamSpec::query(
    "next_token",
    ParamKind::String,
    "Pagination token returned by a previous call",
);
const SEARCH_QUERY: ParamSpec =
    ParamSpec::query("query", ParamKind::String, "Free-text search query");

/// Every operation exposed as an MCP tool, in catalog order
pub static ENDPOINTS: &[EndpointDescriptor] = &[
    // Users
    EndpointDescriptor {
        name: "get_peakmojo_users",
        description: "Get list of PeakMojo users",
        method: HttpMethod::Get,
        path: "/v1/users",
        params: &[LIMIT, NEXT_TOKEN],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_peakmojo_user",
        description: "Get PeakMojo user details by ID",
        method: HttpMethod::Get,
        path: "/v1/users/{user_id}",
        params: &[ParamSpec::path("user_id", "PeakMojo User ID to retrieve")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_peakmojo_user_stats",
        description: "Get PeakMojo user statistics by ID",
        method: HttpMethod::Get,
        path: "/v1/users/{user_id}/stats",
        params: &[ParamSpec::path(
            "user_id",
            "PeakMojo User ID to retrieve stats for",
        )],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "update_peakmojo_user_stats",
        description: "Update PeakMojo user statistics",
        method: HttpMethod::Post,
        path: "/v1/users/stats",
        params: &[ParamSpec::body(
            "stats",
            ParamKind::Object,
            "PeakMojo user statistics to update",
        )],
        body: BodyBinding::Argument("stats"),
    },
    // Personas
    EndpointDescriptor {
        name: "get_peakmojo_personas",
        description: "Get list of PeakMojo personas",
        method: HttpMethod::Get,
        path: "/v1/personas/peakmojo_personas",
        params: &[LIMIT, NEXT_TOKEN],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_peakmojo_persona_tags",
        description: "Get PeakMojo persona tags",
        method: HttpMethod::Get,
        path: "/v1/personas/tags",
        params: &[],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "search_peakmojo_personas",
        description: "Search for PeakMojo personas",
        method: HttpMethod::Get,
        path: "/v1/personas/search",
        params: &[SEARCH_QUERY, LIMIT, NEXT_TOKEN],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "create_peakmojo_persona",
        description: "Create a new PeakMojo persona",
        method: HttpMethod::Post,
        path: "/v1/personas",
        params: &[ParamSpec::body(
            "persona",
            ParamKind::Object,
            "PeakMojo persona details",
        )],
        body: BodyBinding::Argument("persona"),
    },
    // Scenarios
    EndpointDescriptor {
        name: "get_peakmojo_scenarios",
        description: "Get list of PeakMojo scenarios",
        method: HttpMethod::Get,
        path: "/v1/scenarios/peakmojo_scenarios",
        params: &[LIMIT, NEXT_TOKEN],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "create_peakmojo_job_scenario",
        description: "Create a new PeakMojo job scenario",
        method: HttpMethod::Post,
        path: "/v1/job_scenarios",
        params: &[ParamSpec::body(
            "scenario",
            ParamKind::Object,
            "PeakMojo job scenario details",
        )],
        body: BodyBinding::Argument("scenario"),
    },
    // Workspaces, jobs, applications, practices
    EndpointDescriptor {
        name: "get_workspace_personas",
        description: "Get personas for a workspace",
        method: HttpMethod::Get,
        path: "/v1/workspaces/{workspace_id}/personas",
        params: &[ParamSpec::path("workspace_id", "Workspace ID")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_job",
        description: "Get job details",
        method: HttpMethod::Get,
        path: "/v1/job/{job_id}",
        params: &[ParamSpec::path("job_id", "Job ID")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_application",
        description: "Get application details",
        method: HttpMethod::Get,
        path: "/v1/applications/{app_id}",
        params: &[ParamSpec::path("app_id", "Application ID")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_practice_messages",
        description: "Get practice messages",
        method: HttpMethod::Get,
        path: "/v1/practices/{practice_id}/messages",
        params: &[ParamSpec::path("practice_id", "Practice ID")],
        body: BodyBinding::None,
    },
    // Skills and certificates
    EndpointDescriptor {
        name: "get_user_skills",
        description: "Get user skills",
        method: HttpMethod::Get,
        path: "/v1/users/{user_id}/skills",
        params: &[ParamSpec::path("user_id", "User ID")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_certificates",
        description: "Get list of PeakMojo certificates",
        method: HttpMethod::Get,
        path: "/v1/certificates",
        params: &[LIMIT, NEXT_TOKEN],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "get_certificate_skills",
        description: "Get skills for a certificate",
        method: HttpMethod::Get,
        path: "/v1/certificates/{certificate_id}/skills",
        params: &[ParamSpec::path("certificate_id", "Certificate ID")],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "issue_user_certificate",
        description: "Issue a certificate to a user",
        method: HttpMethod::Post,
        path: "/v1/users/{user_id}/certificates/{certificate_id}/issue",
        params: &[
            ParamSpec::path("user_id", "User ID"),
            ParamSpec::path("certificate_id", "Certificate ID"),
        ],
        body: BodyBinding::None,
    },
    EndpointDescriptor {
        name: "add_certificate_skill_courses",
        description: "Add courses to a certificate skill",
        method: HttpMethod::Post,
        path: "/v1/certificates/{certificate_id}/skills/{skill_id}/courses",
        params: &[
            ParamSpec::path("certificate_id", "Certificate ID"),
            ParamSpec::path("skill_id", "Skill ID"),
            ParamSpec::body("courses", ParamKind::Array, "List of courses to add"),
        ],
        body: BodyBinding::Wrapped {
            key: "courses",
            argument: "courses",
        },
    },
];

/// Look up an endpoint by tool name
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

/// Look up an endpoint by tool name, failing with `UnknownTool`
pub fn resolve(name: &str) -> Result<&'static EndpointDescriptor, RegistryError> {
    find(name).ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
}

impl EndpointDescriptor {
    /// Parameters that must be supplied by the caller
    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }

    /// Bind caller arguments into a concrete request.
    ///
    /// Required arguments are checked before anything else is built. Path
    /// values are percent-encoded as a single segment; query parameters are
    /// only emitted when the caller supplied them.
    pub fn bind(&self, arguments: &Value) -> Result<ApiCall, RegistryError> {
        let args = match arguments {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => {
                return Err(RegistryError::InvalidArgument {
                    argument: "arguments".to_string(),
                    reason: format!("expected an object, got {}", type_name(other)),
                })
            }
        };
        let lookup = |name: &str| args.and_then(|m| m.get(name)).filter(|v| !v.is_null());

        for param in self.required_params() {
            if lookup(param.name).is_none() {
                return Err(RegistryError::MissingArgument {
                    tool: self.name.to_string(),
                    argument: param.name.to_string(),
                });
            }
        }

        let mut path = self.path.to_string();
        let mut query = Vec::new();

        for param in self.params {
            let Some(value) = lookup(param.name) else {
                continue;
            };
            match param.location {
                ParamLocation::Path => {
                    let segment = path_segment(param.name, value)?;
                    let placeholder = format!("{{{}}}", param.name);
                    path = path.replace(&placeholder, &urlencoding::encode(&segment));
                }
                ParamLocation::Query => {
                    query.push((param.name.to_string(), scalar_to_string(param.name, value)?));
                }
                ParamLocation::Body => {}
            }
        }

        let body = match self.body {
            BodyBinding::None => None,
            BodyBinding::Argument(name) => lookup(name).cloned(),
            BodyBinding::Wrapped { key, argument } => lookup(argument).map(|value| {
                let mut wrapped = Map::new();
                wrapped.insert(key.to_string(), value.clone());
                Value::Object(wrapped)
            }),
        };

        Ok(ApiCall {
            method: self.method,
            path,
            query,
            body,
        })
    }
}

/// A path value as one segment. Empty and dot segments are rejected.
fn path_segment(name: &str, value: &Value) -> Result<String, RegistryError> {
    let segment = scalar_to_string(name, value)?;
    if matches!(segment.as_str(), "" | "." | "..") {
        return Err(RegistryError::InvalidArgument {
            argument: name.to_string(),
            reason: format!("'{}' is not a valid path segment", segment),
        });
    }
    Ok(segment)
}

fn scalar_to_string(name: &str, value: &Value) -> Result<String, RegistryError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(RegistryError::InvalidArgument {
            argument: name.to_string(),
            reason: format!("expected a string or number, got {}", type_name(other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    /// Smallest argument set that satisfies every required parameter
    fn minimal_arguments(endpoint: &EndpointDescriptor) -> Value {
        let mut args = Map::new();
        for param in endpoint.required_params() {
            let value = match param.kind {
                ParamKind::String | ParamKind::Integer => json!("id-1"),
                ParamKind::Object => json!({"field": "value"}),
                ParamKind::Array => json!([{"course_id": "c-1"}]),
            };
            args.insert(param.name.to_string(), value);
        }
        Value::Object(args)
    }

    #[test]
    fn test_tool_names_unique() {
        let names: HashSet<_> = ENDPOINTS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_placeholders_match_path_params() {
        for endpoint in ENDPOINTS {
            for param in endpoint.params {
                let placeholder = format!("{{{}}}", param.name);
                assert_eq!(
                    endpoint.path.contains(&placeholder),
                    param.location == ParamLocation::Path,
                    "{} / {}",
                    endpoint.name,
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_minimal_arguments_bind_to_registered_route() {
        for endpoint in ENDPOINTS {
            let call = endpoint
                .bind(&minimal_arguments(endpoint))
                .unwrap_or_else(|e| panic!("{}: {}", endpoint.name, e));

            let mut expected = endpoint.path.to_string();
            for param in endpoint.params {
                expected = expected.replace(&format!("{{{}}}", param.name), "id-1");
            }

            assert_eq!(call.method, endpoint.method, "{}", endpoint.name);
            assert_eq!(call.path, expected, "{}", endpoint.name);
            assert!(call.query.is_empty(), "{}", endpoint.name);
            assert_eq!(
                call.body.is_some(),
                endpoint.body != BodyBinding::None,
                "{}",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_bind_user_lookup() {
        let endpoint = find("get_peakmojo_user").unwrap();
        let call = endpoint.bind(&json!({"user_id": "u-42"})).unwrap();

        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.path, "/v1/users/u-42");
        assert!(call.body.is_none());
    }

    #[test]
    fn test_bind_escapes_path_values() {
        let endpoint = find("get_job").unwrap();
        let call = endpoint.bind(&json!({"job_id": "a/b c?"})).unwrap();
        assert_eq!(call.path, "/v1/job/a%2Fb%20c%3F");
    }

    #[test]
    fn test_bind_numeric_path_value() {
        let endpoint = find("get_application").unwrap();
        let call = endpoint.bind(&json!({"app_id": 17})).unwrap();
        assert_eq!(call.path, "/v1/applications/17");
    }

    #[test]
    fn test_dot_segments_rejected() {
        let stats = find("get_peakmojo_user_stats").unwrap();
        let err = stats.bind(&json!({"user_id": ".."})).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidArgument { ref argument, .. } if argument == "user_id"
        ));

        let user = find("get_peakmojo_user").unwrap();
        for value in [".", ""] {
            let err = user.bind(&json!({"user_id": value})).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidArgument { .. }));
        }

        let issue = find("issue_user_certificate").unwrap();
        let err = issue
            .bind(&json!({"user_id": "..", "certificate_id": "c9"}))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    }

    #[test]
    fn test_dots_inside_segment_kept() {
        let endpoint = find("get_peakmojo_user").unwrap();
        let call = endpoint.bind(&json!({"user_id": "..a.b"})).unwrap();
        assert_eq!(call.path, "/v1/users/..a.b");
    }

    #[test]
    fn test_boolean_path_value_rejected() {
        let endpoint = find("get_application").unwrap();
        let err = endpoint.bind(&json!({"app_id": true})).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidArgument { ref argument, ref reason }
                if argument == "app_id" && reason.contains("boolean")
        ));
    }

    #[test]
    fn test_bind_multiple_placeholders() {
        let endpoint = find("issue_user_certificate").unwrap();
        let call = endpoint
            .bind(&json!({"user_id": "u1", "certificate_id": "c9"}))
            .unwrap();

        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/v1/users/u1/certificates/c9/issue");
        assert!(call.body.is_none());
    }

    #[test]
    fn test_missing_required_argument() {
        let endpoint = find("get_peakmojo_user").unwrap();
        let err = endpoint.bind(&json!({})).unwrap_err();

        assert_eq!(
            err,
            RegistryError::MissingArgument {
                tool: "get_peakmojo_user".to_string(),
                argument: "user_id".to_string(),
            }
        );
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let endpoint = find("create_peakmojo_persona").unwrap();
        let err = endpoint.bind(&json!({"persona": null})).unwrap_err();
        assert!(matches!(err, RegistryError::MissingArgument { .. }));
    }

    #[test]
    fn test_null_arguments_for_parameterless_tool() {
        let endpoint = find("get_peakmojo_persona_tags").unwrap();
        let call = endpoint.bind(&Value::Null).unwrap();
        assert_eq!(call.path, "/v1/personas/tags");
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let endpoint = find("get_peakmojo_users").unwrap();
        let err = endpoint.bind(&json!(["user_id"])).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { .. }));
    }

    #[test]
    fn test_object_path_value_rejected() {
        let endpoint = find("get_peakmojo_user").unwrap();
        let err = endpoint.bind(&json!({"user_id": {"id": 1}})).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidArgument { ref argument, .. } if argument == "user_id"
        ));
    }

    #[test]
    fn test_pagination_omitted_when_absent() {
        let endpoint = find("get_peakmojo_users").unwrap();
        let call = endpoint.bind(&json!({})).unwrap();
        assert!(call.query.is_empty());
    }

    #[test]
    fn test_pagination_included_when_present() {
        let endpoint = find("get_peakmojo_users").unwrap();
        let call = endpoint
            .bind(&json!({"limit": 25, "next_token": "abc"}))
            .unwrap();

        assert_eq!(
            call.query,
            vec![
                ("limit".to_string(), "25".to_string()),
                ("next_token".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_only_supplied_query_params_included() {
        let endpoint = find("search_peakmojo_personas").unwrap();
        let call = endpoint
            .bind(&json!({"next_token": "t2", "limit": null}))
            .unwrap();

        assert_eq!(call.query, vec![("next_token".to_string(), "t2".to_string())]);
    }

    #[test]
    fn test_undeclared_arguments_ignored() {
        let endpoint = find("get_certificates").unwrap();
        let call = endpoint.bind(&json!({"verbose": true})).unwrap();
        assert!(call.query.is_empty());
        assert!(call.body.is_none());
    }

    #[test]
    fn test_body_argument_sent_verbatim() {
        let endpoint = find("update_peakmojo_user_stats").unwrap();
        let stats = json!({"sessions": 3, "minutes": 42});
        let call = endpoint.bind(&json!({"stats": stats.clone()})).unwrap();

        assert_eq!(call.path, "/v1/users/stats");
        assert_eq!(call.body, Some(stats));
    }

    #[test]
    fn test_body_argument_wrapped() {
        let endpoint = find("add_certificate_skill_courses").unwrap();
        let call = endpoint
            .bind(&json!({
                "certificate_id": "c1",
                "skill_id": "s1",
                "courses": [{"id": "course-1"}]
            }))
            .unwrap();

        assert_eq!(call.path, "/v1/certificates/c1/skills/s1/courses");
        assert_eq!(call.body, Some(json!({"courses": [{"id": "course-1"}]})));
    }

    #[test]
    fn test_resolve_unknown_tool() {
        let err = resolve("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: frobnicate");
    }
}
