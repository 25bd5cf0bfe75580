use crate::introspection;
use crate::introspection::SchemaSummary;
use crate::output_utils;
use crate::CommandResult;
use crate::commands::RunnableCommand;
use libgraphql_select::transport::HttpClient;
use libgraphql_select::transport::RequestOptions;

const OPERATION_NAME: &str = "IntrospectionQuery";

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[arg(
        help="URL of the GraphQL endpoint to introspect.",
        name="ENDPOINT",
    )]
    pub(crate) endpoint: String,

    #[arg(
        help="Extra HTTP header to send with the request, as `Name: value`. \
             May be repeated.",
        long="header",
        short='H',
        value_parser=parse_header,
    )]
    pub(crate) headers: Vec<(String, String)>,

    #[arg(
        help="Inline argument values into the document instead of sending \
             them as variables.",
        long,
    )]
    pub(crate) no_variables: bool,

    #[arg(
        help="Print the serialized request instead of sending it.",
        long,
    )]
    pub(crate) print_only: bool,
}

pub(super) fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() =>
            Ok((name.trim().to_string(), value.trim().to_string())),
        _ => Err(format!("Expected `Name: value`, got `{raw}`")),
    }
}

pub(super) fn format_summary(endpoint: &str, summary: &SchemaSummary) -> String {
    let mut lines = vec![
        format!("{} Introspected {endpoint}:", output_utils::GREEN_CHECK),
        format!("  * Query type: {}", summary.query_type),
        format!(
            "  * Mutation type: {}",
            summary.mutation_type.as_deref().unwrap_or("(none)"),
        ),
        format!(
            "  * Subscription type: {}",
            summary.subscription_type.as_deref().unwrap_or("(none)"),
        ),
        format!("  * {} types:", summary.types.len()),
    ];
    for (kind, count) in summary.count_by_kind() {
        lines.push(format!("    - {kind}: {count}"));
    }
    lines.join("\n")
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub async fn run(self) -> CommandResult {
        let builder = introspection::schema_summary();
        let options =
            RequestOptions::new()
                .with_operation_name(OPERATION_NAME)
                .with_use_variables(!self.no_variables);

        if self.print_only {
            let request = builder.to_graphql(
                options.use_variables,
                options.operation_name.as_deref(),
                options.drop_null_input_values,
            );
            return match serde_json::to_string_pretty(&request) {
                Ok(json) => CommandResult::success(format_args!("{json}")),
                Err(e) => CommandResult::failure(format_args!(
                    "{} Failed to serialize request: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        let client =
            self.headers.iter().fold(
                HttpClient::new(self.endpoint.as_str()),
                |client, (name, value)| client.with_header(name, value),
            );
        log::debug!(
            "Introspecting `{}` with {} extra headers.",
            client.endpoint(),
            self.headers.len(),
        );

        match client.execute(&builder, &options).await {
            Ok(response) => {
                for error in &response.errors {
                    log::warn!("Server reported an error: {error}");
                }
                CommandResult::success(format_args!(
                    "{}",
                    format_summary(client.endpoint(), &response.data),
                ))
            },

            Err(e) => CommandResult::failure(format_args!(
                "{} Introspection of `{}` failed: {e}",
                output_utils::RED_X,
                client.endpoint(),
            )),
        }
    }
}
