//! Chat gate: keyword admission, recommendation context, prompt assembly.

use crate::error::AppError;
use crate::gemini::GeminiClient;
use crate::models::Product;

use super::catalog::CatalogService;

/// Fixed in-domain keyword set, loaded once and immutable thereafter.
/// Matching is substring-based over the lowercased message.
const COMMERCE_KEYWORDS: &[&str] = &[
    "product", "products", "buy", "shopping", "shop", "price", "budget", "cart", "wishlist",
    "order", "delivery", "shipping", "payment", "upi", "card", "checkout", "discount",
    "electronics", "fashion", "home", "beauty", "books", "sports", "recommend", "track",
];

/// Refusal returned for blank or out-of-domain messages, without touching
/// the recommender or the generator.
pub const REFUSAL: &str = "I can only help with this e-commerce app: products, prices, budget, \
     cart, wishlist, payments, orders, and delivery tracking.";

/// Number of products embedded into the prompt context.
const RECOMMENDATION_LIMIT: usize = 5;

/// Domain-restricted chat assistant.
#[derive(Clone)]
pub struct ChatService {
    catalog: CatalogService,
    gemini: GeminiClient,
}

impl ChatService {
    #[must_use]
    pub fn new(catalog: CatalogService, gemini: GeminiClient) -> Self {
        Self { catalog, gemini }
    }

    /// Reply to a free-text message.
    ///
    /// Out-of-domain messages short-circuit to the fixed refusal. For
    /// in-domain messages the reply always comes from the generator; this
    /// service never fabricates one locally when the generator fails.
    ///
    /// # Errors
    ///
    /// Propagates the generator's failure: unavailable when unreachable
    /// or unconfigured, upstream error when it returns nothing usable.
    pub async fn reply_to(&self, message: &str) -> Result<String, AppError> {
        let normalized = message.to_lowercase();
        if !is_commerce_question(&normalized) {
            return Ok(REFUSAL.to_string());
        }

        let recommended = self.catalog.recommend(message, RECOMMENDATION_LIMIT);
        let prompt = build_prompt(&recommended, message);
        Ok(self.gemini.generate_reply(&prompt).await?)
    }
}

fn is_commerce_question(normalized_message: &str) -> bool {
    if normalized_message.trim().is_empty() {
        return false;
    }
    COMMERCE_KEYWORDS
        .iter()
        .any(|keyword| normalized_message.contains(keyword))
}

fn build_prompt(recommended: &[Product], message: &str) -> String {
    let product_context = recommended
        .iter()
        .map(|product| {
            format!(
                "- {} | Category: {} | Price: Rs {}",
                product.name, product.category, product.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the in-app assistant for an e-commerce project.\n\
         Strict rule: answer only e-commerce topics for this app.\n\
         If user asks non e-commerce topics, politely refuse and redirect to shopping help.\n\
         Always prefer concise practical answers.\n\
         If user asks for recommendations, include products from AVAILABLE_PRODUCTS.\n\
         \n\
         AVAILABLE_PRODUCTS:\n\
         {product_context}\n\
         \n\
         USER_MESSAGE:\n\
         {message}\n"
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::GeminiConfig;
    use crate::gemini::GeminiError;
    use crate::store::CatalogStore;

    use super::*;

    fn service() -> ChatService {
        let catalog = CatalogService::new(Arc::new(CatalogStore::seed(10)));
        let gemini = GeminiClient::new(&GeminiConfig::unconfigured()).expect("client");
        ChatService::new(catalog, gemini)
    }

    #[test]
    fn test_gate_rejects_blank_and_smalltalk() {
        assert!(!is_commerce_question(""));
        assert!(!is_commerce_question("   "));
        assert!(!is_commerce_question("hello there"));
        assert!(!is_commerce_question("what is the weather today"));
    }

    #[test]
    fn test_gate_accepts_commerce_topics() {
        assert!(is_commerce_question("recommend something under budget"));
        assert!(is_commerce_question("where is my order"));
        assert!(is_commerce_question("any good electronics?"));
        // Keyword match is substring-based
        assert!(is_commerce_question("i went shopping yesterday"));
    }

    #[test]
    fn test_prompt_embeds_context_and_message() {
        let products = vec![Product {
            id: clementine_core::ProductId::new(1),
            name: "Linen Shirt".to_string(),
            category: crate::models::Category::Fashion,
            description: String::new(),
            price: 499,
            rating: 4.2,
        }];
        let prompt = build_prompt(&products, "recommend a shirt");

        assert!(prompt.contains("- Linen Shirt | Category: Fashion | Price: Rs 499"));
        assert!(prompt.contains("USER_MESSAGE:\nrecommend a shirt"));
        assert!(prompt.contains("Strict rule: answer only e-commerce topics"));
    }

    #[tokio::test]
    async fn test_out_of_domain_refuses_without_calling_generator() {
        // The generator has no API key, so any call to it would error;
        // a clean refusal proves it was never invoked.
        let chat = service();
        let reply = chat.reply_to("hello there").await.expect("refusal");
        assert_eq!(reply, REFUSAL);
    }

    #[tokio::test]
    async fn test_in_domain_without_key_is_unavailable() {
        let chat = service();
        let err = chat.reply_to("recommend books").await.expect_err("no key");
        assert!(matches!(
            err,
            AppError::Gemini(GeminiError::MissingApiKey)
        ));
    }
}
