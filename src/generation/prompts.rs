//! Prompt construction for the two generation requests.
//!
//! The guideline blocks are compiled-in assets so the binary has no
//! runtime file dependencies. Their content mirrors what the grocery
//! prompt needs: strict output shape, package-size conversion rules,
//! the fixed category taxonomy, and one worked example.

const OUTPUT_REQUIREMENTS: &str = include_str!("prompts/output_requirements.txt");
const CONVERSION_GUIDELINES: &str = include_str!("prompts/conversion_guidelines.txt");
const CATEGORY_GUIDELINES: &str = include_str!("prompts/category_guidelines.txt");
const EXAMPLES: &str = include_str!("prompts/examples.txt");

pub fn grocery_list(recipe_name: &str, servings: u32) -> String {
    format!(
        "You are a helpful assistant that creates grocery lists based on recipes.\n\
        \n\
        The user wants to cook a recipe. They can easily find the ingredients for the recipe \
        online, but it can be difficult to know what and how much of each ingredient to buy \
        from the grocery store. The measurements in recipes are often in cups, tablespoons, or \
        other units that are not directly related to how ingredients are sold in stores.\n\
        \n\
        Your task is to take a given recipe, find its ingredients and their quantities, and \
        translate them into a clear, actionable grocery list, optimized for how items are \
        typically sold in stores. Please create a grocery list for {servings} servings of the \
        following recipe: {recipe_name}.\n\
        \n\
        Please think step by step.\n\
        1. First, identify the ingredients and their quantities from the recipe based on the \
        number of servings specified.\n\
        2. Next, convert these quantities into common grocery store packaging sizes.\n\
        3. Then assign these items into categories based on how they are typically sold in \
        grocery stores.\n\
        4. Finally, format the grocery list in a clear and concise manner, listing each \
        ingredient with its corresponding quantity.\n\
        \n\
        <Output Requirements>\n{OUTPUT_REQUIREMENTS}\n\
        <Conversion Guidelines & Assumptions>\n{CONVERSION_GUIDELINES}\n\
        <Category Guidelines>\n{CATEGORY_GUIDELINES}\n\
        <Examples>\n{EXAMPLES}"
    )
}

pub fn search_results(recipe_name: &str) -> String {
    format!(
        "Your task is to give variations of recipe names given the following recipe: \
        {recipe_name}.\n\
        \n\
        Please output the response as a list formatted as the following:\n\
        [\"recipe name 1\", \"recipe name 2\", \"recipe name 3\", ...]\n\
        \n\
        Please limit the response to 4-5 items at the most."
    )
}
