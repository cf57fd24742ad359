mod london;
