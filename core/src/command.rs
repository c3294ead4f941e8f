//! Admin commands — the operation surface the dashboard submits.
//!
//! Commands address entities generically (`EntityKind`) and carry
//! create/update payloads as raw JSON, the same shape a form posts.
//! Dispatch deserializes each payload into the entity's typed draft or
//! patch, so a malformed field set fails with `InvalidPayload` before it
//! can reach a sequence. Missing ids come back as `NotFound` outcomes,
//! never as errors.

use crate::{
    error::{AdminError, AdminResult},
    store::{
        AdminStore, AdminUser, AdminUserPatch, AnalyticsRecord, AnalyticsRecordPatch, Business,
        BusinessPatch, Customer, CustomerPatch, CustomerTier, CustomerTierPatch, Feedback,
        FeedbackPatch, FraudFlag, FraudFlagPatch, LoyaltyAccount, LoyaltyAccountPatch, Offer,
        OfferPatch, Product, ProductPatch, Promotion, PromotionPatch, Redemption, RedemptionPatch,
        Referral, ReferralPatch, StoreCounts, Tier, TierPatch, Transaction, TransactionPatch,
    },
    types::RecordId,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Business,
    Product,
    Customer,
    Offer,
    Transaction,
    Redemption,
    LoyaltyAccount,
    Tier,
    CustomerTier,
    Referral,
    Feedback,
    Promotion,
    FraudFlag,
    Analytics,
    AdminUser,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Product => "product",
            Self::Customer => "customer",
            Self::Offer => "offer",
            Self::Transaction => "transaction",
            Self::Redemption => "redemption",
            Self::LoyaltyAccount => "loyalty_account",
            Self::Tier => "tier",
            Self::CustomerTier => "customer_tier",
            Self::Referral => "referral",
            Self::Feedback => "feedback",
            Self::Promotion => "promotion",
            Self::FraudFlag => "fraud_flag",
            Self::Analytics => "analytics",
            Self::AdminUser => "admin_user",
        }
    }
}

/// One named foreign-key filter ("children of X").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    ProductsForBusiness,
    OffersForBusiness,
    PromotionsForBusiness,
    FeedbackForBusiness,
    AnalyticsForBusiness,
    TransactionsForBusiness,
    TransactionsForCustomer,
    RedemptionsForCustomer,
    LoyaltyAccountsForCustomer,
    ReferralsForCustomer,
    FeedbackForCustomer,
    FlagsForCustomer,
    TiersForCustomer,
    RedemptionsForOffer,
    FlagsForTransaction,
}

/// Every operation the dashboard can submit.
/// Variants are added as pages are built — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AdminCommand {
    List {
        entity: EntityKind,
    },
    Get {
        entity: EntityKind,
        id: RecordId,
    },
    Create {
        entity: EntityKind,
        fields: Value,
    },
    Update {
        entity: EntityKind,
        id: RecordId,
        fields: Value,
    },
    Delete {
        entity: EntityKind,
        id: RecordId,
    },
    Related {
        relation: RelationKind,
        id: RecordId,
    },
    Counts,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Rows { rows: Value },
    Row { row: Value },
    Created { row: Value },
    Updated { row: Value },
    NotFound { entity: EntityKind, id: RecordId },
    Deleted { id: RecordId, removed: bool },
    Counts { counts: StoreCounts },
}

/// Execute one command against the store.
pub fn dispatch(store: &mut AdminStore, command: AdminCommand) -> AdminResult<CommandOutcome> {
    match command {
        AdminCommand::List { entity } => Ok(CommandOutcome::Rows {
            rows: list_rows(store, entity)?,
        }),
        AdminCommand::Get { entity, id } => match get_row(store, entity, id)? {
            Some(row) => Ok(CommandOutcome::Row { row }),
            None => Ok(CommandOutcome::NotFound { entity, id }),
        },
        AdminCommand::Create { entity, fields } => Ok(CommandOutcome::Created {
            row: create_row(store, entity, fields)?,
        }),
        AdminCommand::Update { entity, id, fields } => {
            match update_row(store, entity, id, fields)? {
                Some(row) => Ok(CommandOutcome::Updated { row }),
                None => {
                    log::warn!("update on missing {} {id}", entity.name());
                    Ok(CommandOutcome::NotFound { entity, id })
                }
            }
        }
        AdminCommand::Delete { entity, id } => {
            let removed = delete_row(store, entity, id);
            if !removed {
                log::debug!("delete on missing {} {id}", entity.name());
            }
            Ok(CommandOutcome::Deleted { id, removed })
        }
        AdminCommand::Related { relation, id } => Ok(CommandOutcome::Rows {
            rows: related_rows(store, relation, id)?,
        }),
        AdminCommand::Counts => Ok(CommandOutcome::Counts {
            counts: store.counts(),
        }),
    }
}

fn to_value<T: Serialize>(row: T) -> AdminResult<Value> {
    Ok(serde_json::to_value(row)?)
}

fn parse<T: DeserializeOwned>(entity: EntityKind, fields: Value) -> AdminResult<T> {
    serde_json::from_value(fields).map_err(|e| AdminError::InvalidPayload {
        entity: entity.name(),
        reason: e.to_string(),
    })
}

fn list_rows(store: &mut AdminStore, entity: EntityKind) -> AdminResult<Value> {
    match entity {
        EntityKind::Business => to_value(store.list_businesses()),
        EntityKind::Product => to_value(store.list_products()),
        EntityKind::Customer => to_value(store.list_customers()),
        EntityKind::Offer => to_value(store.list_offers()),
        EntityKind::Transaction => to_value(store.list_transactions()),
        EntityKind::Redemption => to_value(store.list_redemptions()),
        EntityKind::LoyaltyAccount => to_value(store.list_loyalty_accounts()),
        EntityKind::Tier => to_value(store.list_tiers()),
        EntityKind::CustomerTier => to_value(store.list_customer_tiers()),
        EntityKind::Referral => to_value(store.list_referrals()),
        EntityKind::Feedback => to_value(store.list_feedback()),
        EntityKind::Promotion => to_value(store.list_promotions()),
        EntityKind::FraudFlag => to_value(store.list_fraud_flags()),
        EntityKind::Analytics => to_value(store.list_analytics()),
        EntityKind::AdminUser => to_value(store.list_admin_users()),
    }
}

fn get_row(store: &mut AdminStore, entity: EntityKind, id: RecordId) -> AdminResult<Option<Value>> {
    match entity {
        EntityKind::Business => store.get_business(id).map(to_value).transpose(),
        EntityKind::Product => store.get_product(id).map(to_value).transpose(),
        EntityKind::Customer => store.get_customer(id).map(to_value).transpose(),
        EntityKind::Offer => store.get_offer(id).map(to_value).transpose(),
        EntityKind::Transaction => store.get_transaction(id).map(to_value).transpose(),
        EntityKind::Redemption => store.get_redemption(id).map(to_value).transpose(),
        EntityKind::LoyaltyAccount => store.get_loyalty_account(id).map(to_value).transpose(),
        EntityKind::Tier => store.get_tier(id).map(to_value).transpose(),
        EntityKind::CustomerTier => store.get_customer_tier(id).map(to_value).transpose(),
        EntityKind::Referral => store.get_referral(id).map(to_value).transpose(),
        EntityKind::Feedback => store.get_feedback(id).map(to_value).transpose(),
        EntityKind::Promotion => store.get_promotion(id).map(to_value).transpose(),
        EntityKind::FraudFlag => store.get_fraud_flag(id).map(to_value).transpose(),
        EntityKind::Analytics => store.get_analytics(id).map(to_value).transpose(),
        EntityKind::AdminUser => store.get_admin_user(id).map(to_value).transpose(),
    }
}

fn create_row(store: &mut AdminStore, entity: EntityKind, fields: Value) -> AdminResult<Value> {
    match entity {
        EntityKind::Business => {
            let draft: Business = parse(entity, fields)?;
            to_value(store.create_business(draft))
        }
        EntityKind::Product => {
            let draft: Product = parse(entity, fields)?;
            to_value(store.create_product(draft))
        }
        EntityKind::Customer => {
            let draft: Customer = parse(entity, fields)?;
            to_value(store.create_customer(draft))
        }
        EntityKind::Offer => {
            let draft: Offer = parse(entity, fields)?;
            to_value(store.create_offer(draft))
        }
        EntityKind::Transaction => {
            let draft: Transaction = parse(entity, fields)?;
            to_value(store.create_transaction(draft))
        }
        EntityKind::Redemption => {
            let draft: Redemption = parse(entity, fields)?;
            to_value(store.create_redemption(draft))
        }
        EntityKind::LoyaltyAccount => {
            let draft: LoyaltyAccount = parse(entity, fields)?;
            to_value(store.create_loyalty_account(draft))
        }
        EntityKind::Tier => {
            let draft: Tier = parse(entity, fields)?;
            to_value(store.create_tier(draft))
        }
        EntityKind::CustomerTier => {
            let draft: CustomerTier = parse(entity, fields)?;
            to_value(store.create_customer_tier(draft))
        }
        EntityKind::Referral => {
            let draft: Referral = parse(entity, fields)?;
            to_value(store.create_referral(draft))
        }
        EntityKind::Feedback => {
            let draft: Feedback = parse(entity, fields)?;
            to_value(store.create_feedback(draft))
        }
        EntityKind::Promotion => {
            let draft: Promotion = parse(entity, fields)?;
            to_value(store.create_promotion(draft))
        }
        EntityKind::FraudFlag => {
            let draft: FraudFlag = parse(entity, fields)?;
            to_value(store.create_fraud_flag(draft))
        }
        EntityKind::Analytics => {
            let draft: AnalyticsRecord = parse(entity, fields)?;
            to_value(store.create_analytics(draft))
        }
        EntityKind::AdminUser => {
            let draft: AdminUser = parse(entity, fields)?;
            to_value(store.create_admin_user(draft))
        }
    }
}

fn update_row(
    store: &mut AdminStore,
    entity: EntityKind,
    id: RecordId,
    fields: Value,
) -> AdminResult<Option<Value>> {
    match entity {
        EntityKind::Business => {
            let patch: BusinessPatch = parse(entity, fields)?;
            store.update_business(id, &patch).map(to_value).transpose()
        }
        EntityKind::Product => {
            let patch: ProductPatch = parse(entity, fields)?;
            store.update_product(id, &patch).map(to_value).transpose()
        }
        EntityKind::Customer => {
            let patch: CustomerPatch = parse(entity, fields)?;
            store.update_customer(id, &patch).map(to_value).transpose()
        }
        EntityKind::Offer => {
            let patch: OfferPatch = parse(entity, fields)?;
            store.update_offer(id, &patch).map(to_value).transpose()
        }
        EntityKind::Transaction => {
            let patch: TransactionPatch = parse(entity, fields)?;
            store
                .update_transaction(id, &patch)
                .map(to_value)
                .transpose()
        }
        EntityKind::Redemption => {
            let patch: RedemptionPatch = parse(entity, fields)?;
            store.update_redemption(id, &patch).map(to_value).transpose()
        }
        EntityKind::LoyaltyAccount => {
            let patch: LoyaltyAccountPatch = parse(entity, fields)?;
            store
                .update_loyalty_account(id, &patch)
                .map(to_value)
                .transpose()
        }
        EntityKind::Tier => {
            let patch: TierPatch = parse(entity, fields)?;
            store.update_tier(id, &patch).map(to_value).transpose()
        }
        EntityKind::CustomerTier => {
            let patch: CustomerTierPatch = parse(entity, fields)?;
            store
                .update_customer_tier(id, &patch)
                .map(to_value)
                .transpose()
        }
        EntityKind::Referral => {
            let patch: ReferralPatch = parse(entity, fields)?;
            store.update_referral(id, &patch).map(to_value).transpose()
        }
        EntityKind::Feedback => {
            let patch: FeedbackPatch = parse(entity, fields)?;
            store.update_feedback(id, &patch).map(to_value).transpose()
        }
        EntityKind::Promotion => {
            let patch: PromotionPatch = parse(entity, fields)?;
            store.update_promotion(id, &patch).map(to_value).transpose()
        }
        EntityKind::FraudFlag => {
            let patch: FraudFlagPatch = parse(entity, fields)?;
            store.update_fraud_flag(id, &patch).map(to_value).transpose()
        }
        EntityKind::Analytics => {
            let patch: AnalyticsRecordPatch = parse(entity, fields)?;
            store.update_analytics(id, &patch).map(to_value).transpose()
        }
        EntityKind::AdminUser => {
            let patch: AdminUserPatch = parse(entity, fields)?;
            store.update_admin_user(id, &patch).map(to_value).transpose()
        }
    }
}

fn delete_row(store: &mut AdminStore, entity: EntityKind, id: RecordId) -> bool {
    match entity {
        EntityKind::Business => store.delete_business(id),
        EntityKind::Product => store.delete_product(id),
        EntityKind::Customer => store.delete_customer(id),
        EntityKind::Offer => store.delete_offer(id),
        EntityKind::Transaction => store.delete_transaction(id),
        EntityKind::Redemption => store.delete_redemption(id),
        EntityKind::LoyaltyAccount => store.delete_loyalty_account(id),
        EntityKind::Tier => store.delete_tier(id),
        EntityKind::CustomerTier => store.delete_customer_tier(id),
        EntityKind::Referral => store.delete_referral(id),
        EntityKind::Feedback => store.delete_feedback(id),
        EntityKind::Promotion => store.delete_promotion(id),
        EntityKind::FraudFlag => store.delete_fraud_flag(id),
        EntityKind::Analytics => store.delete_analytics(id),
        EntityKind::AdminUser => store.delete_admin_user(id),
    }
}

fn related_rows(store: &mut AdminStore, relation: RelationKind, id: RecordId) -> AdminResult<Value> {
    match relation {
        RelationKind::ProductsForBusiness => to_value(store.products_for_business(id)),
        RelationKind::OffersForBusiness => to_value(store.offers_for_business(id)),
        RelationKind::PromotionsForBusiness => to_value(store.promotions_for_business(id)),
        RelationKind::FeedbackForBusiness => to_value(store.feedback_for_business(id)),
        RelationKind::AnalyticsForBusiness => to_value(store.analytics_for_business(id)),
        RelationKind::TransactionsForBusiness => to_value(store.transactions_for_business(id)),
        RelationKind::TransactionsForCustomer => to_value(store.transactions_for_customer(id)),
        RelationKind::RedemptionsForCustomer => to_value(store.redemptions_for_customer(id)),
        RelationKind::LoyaltyAccountsForCustomer => {
            to_value(store.loyalty_accounts_for_customer(id))
        }
        RelationKind::ReferralsForCustomer => to_value(store.referrals_for_customer(id)),
        RelationKind::FeedbackForCustomer => to_value(store.feedback_for_customer(id)),
        RelationKind::FlagsForCustomer => to_value(store.flags_for_customer(id)),
        RelationKind::TiersForCustomer => to_value(store.tiers_for_customer(id)),
        RelationKind::RedemptionsForOffer => to_value(store.redemptions_for_offer(id)),
        RelationKind::FlagsForTransaction => to_value(store.flags_for_transaction(id)),
    }
}
