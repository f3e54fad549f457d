use anyhow::{Context, bail};

use business::domain::fetch::http::HttpMethod;
use business::domain::item::model::ItemRequest;
use business::domain::list::model::ListRequest;
use business::domain::receipt::model::SimpleReceiptRequest;
use business::domain::shared::value_objects::EntityId;

const USAGE: &str = "usage:
  shopping-client <get|delete> <endpoint>
  shopping-client <post|put> <endpoint> <json-body>
  shopping-client new-list <endpoint> <name> [description]
  shopping-client new-item <endpoint> <list-id> <name> <amount> [unit] [brand]
  shopping-client new-receipt <endpoint> <site> <total> [cash|card] [category]";

/// One call to issue, with its body already serialized.
#[derive(Debug, PartialEq)]
pub struct Command {
    pub method: HttpMethod,
    pub endpoint: String,
    pub body: Option<String>,
}

impl Command {
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let (verb, rest) = args.split_first().context(USAGE)?;
        let (endpoint, rest) = rest.split_first().context(USAGE)?;
        let endpoint = endpoint.clone();

        match verb.as_str() {
            "new-list" => {
                let name = arg(rest, 0)?;
                let description = rest.get(1).cloned().unwrap_or_default();
                Ok(Self::post(endpoint, ListRequest::new(name, description).to_body()))
            }
            "new-item" => {
                let list = EntityId::new(arg(rest, 0)?);
                let name = arg(rest, 1)?;
                let amount = arg(rest, 2)?
                    .parse::<f64>()
                    .context("amount must be a number")?;
                let unit = rest.get(3).cloned();
                let brand = rest.get(4).cloned();
                let request = ItemRequest::new(name, unit, amount, brand, list);
                Ok(Self::post(endpoint, request.to_body()))
            }
            "new-receipt" => {
                let site = arg(rest, 0)?;
                let total = arg(rest, 1)?
                    .parse::<f64>()
                    .context("total must be a number")?;
                let cash = match rest.get(2).map(String::as_str) {
                    None => None,
                    Some("cash") => Some(true),
                    Some("card") => Some(false),
                    Some(other) => bail!("payment method must be cash or card, got {}", other),
                };
                let request = SimpleReceiptRequest::new(site, total, cash, rest.get(3).cloned());
                Ok(Self::post(endpoint, request.to_body()))
            }
            raw => {
                let method: HttpMethod = raw.parse().map_err(anyhow::Error::msg)?;
                let body = match method {
                    HttpMethod::Post | HttpMethod::Put => Some(arg(rest, 0)?),
                    HttpMethod::Get | HttpMethod::Delete => None,
                };
                Ok(Self {
                    method,
                    endpoint,
                    body,
                })
            }
        }
    }

    fn post(endpoint: String, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            endpoint,
            body: Some(body),
        }
    }
}

fn arg(rest: &[String], index: usize) -> anyhow::Result<String> {
    rest.get(index).cloned().context(USAGE)
}
