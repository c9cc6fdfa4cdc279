//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CoachChatRequest,
    CoachChatResponse,
    ErrorBody,
    FoodDetectionBody,
    // Journal models
    JournalAnalysisRequest,
    JournalAnalysisResponse,
    MacronutrientsBody,
    // Meal models
    MealAnalysisRequest,
    MealAnalysisResponse,
    MicronutrientsBody,
    // Pose models
    PoseAnalysisRequest,
    PoseAnalysisResponse,
    PoseFeedbackItemBody,
    SentimentAnalysisBody,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::journal::analyze_journal,
        super::meal::analyze_meal,
        super::pose::analyze_pose,
        super::coach::coach_chat,
    ),
    components(schemas(
        JournalAnalysisRequest,
        JournalAnalysisResponse,
        SentimentAnalysisBody,
        MealAnalysisRequest,
        MealAnalysisResponse,
        FoodDetectionBody,
        MacronutrientsBody,
        MicronutrientsBody,
        PoseAnalysisRequest,
        PoseAnalysisResponse,
        PoseFeedbackItemBody,
        CoachChatRequest,
        CoachChatResponse,
        ErrorBody,
    )),
    tags(
        (name = "Journal", description = "Journal sentiment and risk analysis"),
        (name = "Meal", description = "Meal photo nutrition estimation"),
        (name = "Pose", description = "Workout form scoring"),
        (name = "Coach", description = "Coaching chat")
    ),
    info(
        title = "Wellspring API",
        description = "Wellness signal scoring pipelines",
    )
)]
pub struct ApiDoc;
