use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    ChefId,
    Title,
    TitleText,
    Description,
    DescriptionText,
    OriginCountry,
    OriginCountryText,
    Ingredients,
    IngredientsText,
    Instructions,
    HealthCondition,
    Dietary,
    MealType,
    MealTime,
    Budget,
    Currency,
    CookingTime,
    VideoUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeReview {
    Table,
    Id,
    RecipeId,
    UserId,
    Rating,
    Content,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum RecipeSaved {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum FilterSession {
    Table,
    Id,
    HealthCondition,
    Dietary,
    Allergies,
    UpdatedAt,
}
